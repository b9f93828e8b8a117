//! Startup fetch of the press, election and geometry documents.
//!
//! All three requests are issued before any is awaited, so they run
//! concurrently. The first failure aborts the load; there is no retry and
//! no partial store.

use crate::config::ViewerConfig;
use anyhow::Context;
use js_sys::{Promise, Uint8Array};
use phm_db::DatasetStore;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}", err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Await a `fetch()` promise and return the response body.
async fn read_body(url: &str, request: Promise) -> anyhow::Result<Vec<u8>> {
    let response: Response = JsFuture::from(request)
        .await
        .map_err(js_error)
        .with_context(|| format!("request for {} failed", url))?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        anyhow::bail!("HTTP error! Status: {} ({})", response.status(), url);
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)
        .with_context(|| format!("failed to read body of {}", url))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Fetch the three documents and build the store.
pub async fn load_store(config: &ViewerConfig) -> anyhow::Result<DatasetStore> {
    let window = web_sys::window().context("no window available")?;

    let urls = [
        config.press_url.as_str(),
        config.elections_url.as_str(),
        config.geometry_url.as_str(),
    ];
    let [press, elections, geometry] = urls.map(|url| window.fetch_with_str(url));

    let press = read_body(urls[0], press).await?;
    let elections = read_body(urls[1], elections).await?;
    let geometry = read_body(urls[2], geometry).await?;
    log::info!(
        "[PHM] fetched documents: press {} bytes, elections {} bytes, geometry {} bytes",
        press.len(),
        elections.len(),
        geometry.len()
    );

    DatasetStore::from_bytes(&press, &elections, &geometry)
}
