use crate::types::{Method, Request, ResponseJson};
use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;

/// Sends `req` to `base_url` and decodes the JSON body.
///
/// Fails on transport errors, on any non-2xx status and on a body that is
/// not JSON. Nothing is retried.
pub fn send(base_url: &str, req: &Request) -> Result<ResponseJson> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), req.path);
    let client = Client::new();
    let mut builder = match req.method {
        Method::Get => client.get(&url),
        Method::Post => client.post(&url),
    };
    for (k, v) in req.headers.iter() {
        builder = builder.header(k.as_str(), v.as_str());
    }
    if !req.query.is_empty() {
        builder = builder.query(&req.query);
    }
    if let Some(body) = &req.body {
        builder = builder.json(body);
    }
    debug!("{} {} query={:?} body={:?}", req.method, url, req.query, req.body);

    let res = builder
        .send()
        .with_context(|| format!("Failed to send request: {} {}", req.method, url))?;
    debug!("{} {} -> {}", req.method, url, res.status());
    let res = res
        .error_for_status()
        .with_context(|| format!("Request rejected: {} {}", req.method, url))?;
    let text = res
        .text()
        .with_context(|| "Failed to read response body.")?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse response to json: {}", text))
}
