use image::RgbaImage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("fetch failed for {path}: {message}")]
    Fetch { path: String, message: String },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("could not read body of {path}: {message}")]
    Body { path: String, message: String },
    #[error("could not decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Fetch an image relative to the page and decode it to RGBA8.
pub async fn load_image(path: &str) -> Result<RgbaImage, AssetError> {
    let bytes = fetch_bytes(path).await?;
    let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_string(),
        source,
    })?;
    let rgba = img.into_rgba8();
    log::info!(
        "[assets] loaded {} ({}x{})",
        path,
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

async fn fetch_bytes(path: &str) -> Result<Vec<u8>, AssetError> {
    let fetch_err = |e: wasm_bindgen::JsValue| AssetError::Fetch {
        path: path.to_string(),
        message: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        path: path.to_string(),
        message: "no window".into(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AssetError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let body_err = |e: wasm_bindgen::JsValue| AssetError::Body {
        path: path.to_string(),
        message: format!("{:?}", e),
    };
    let buf = JsFuture::from(resp.array_buffer().map_err(body_err)?)
        .await
        .map_err(body_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
