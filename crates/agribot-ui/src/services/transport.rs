//! `fetch`-backed [`Transport`] built on `gloo-net`.

use async_trait::async_trait;
use gloo::console;
use gloo_net::http::Request;
use web_sys::FormData;

use crate::core::gateway::{
    Method, PreparedBody, PreparedRequest, RawResponse, Transport, TransportError,
};

/// Sends prepared requests with the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type Form = FormData;

    async fn execute(
        &self,
        request: PreparedRequest<FormData>,
    ) -> Result<RawResponse, TransportError> {
        console::debug!(format!("{} {}", request.method, request.url));
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        builder = match request.body {
            PreparedBody::None => builder,
            PreparedBody::Text(text) => builder.body(text),
            PreparedBody::Form(form) => builder.body(form),
        };
        let response = builder
            .send()
            .await
            .map_err(|err| {
                console::error!(format!("{} {} failed: {err}", request.method, request.url));
                TransportError::Network(err.to_string())
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| {
                console::error!(format!("{} {}: unreadable body: {err}", request.method, request.url));
                TransportError::Body(err.to_string())
            })?;
        Ok(RawResponse { status, body })
    }
}
