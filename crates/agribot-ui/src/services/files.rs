//! File reading and download helpers.

use anyhow::anyhow;
use gloo::file::{Blob, File, ObjectUrl};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Read a picked file as UTF-8 text.
pub(crate) async fn read_text(file: &web_sys::File) -> anyhow::Result<String> {
    let file = File::from(file.clone());
    gloo::file::futures::read_as_text(&file)
        .await
        .map_err(|err| anyhow!("{err}"))
}

/// Offer `contents` as a JSON download named `file_name`.
pub(crate) fn download_json(file_name: &str, contents: &str) -> anyhow::Result<()> {
    let blob = Blob::new_with_options(contents, Some("application/json"));
    let url = ObjectUrl::from(blob);
    let anchor = document()
        .create_element("a")
        .map_err(|_| anyhow!("cannot create download link"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| anyhow!("download link is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Files selected in an `<input type="file">`.
pub(crate) fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    input
        .files()
        .map(|list| (0..list.length()).filter_map(|index| list.get(index)).collect())
        .unwrap_or_default()
}

