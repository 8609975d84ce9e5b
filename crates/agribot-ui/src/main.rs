#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Boots the admin console in the browser. Native builds only report which
//! API the bundle would talk to.

#[cfg(target_arch = "wasm32")]
fn main() {
    agribot_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    describe_build(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
fn describe_build(out: &mut impl std::io::Write) -> std::io::Result<()> {
    let config = agribot_ui::core::config::AppConfig::from_build_env();
    writeln!(
        out,
        "agribot-ui is a wasm32 app (`trunk build`); API: {}/{}",
        config.base_url, config.api_prefix
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn build_description_names_the_api() -> std::io::Result<()> {
        let mut out = Vec::new();
        describe_build(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("wasm32"));
        assert!(text.contains(".netlify/functions/api") || option_env!("AGRIBOT_API_PREFIX").is_some());
        Ok(())
    }
}
