//! 推論サービス連携（fetch + FormData）

use crate::surface::BrowserFile;
use leptos::prelude::document;
use photo_classify_common::{parse_http_response, Error, Prediction, PredictionClient, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";
const FIELD_NAME: &str = "image";

/// 推論サービスの生レスポンス
struct RawResponse {
    ok: bool,
    status: u16,
    body: String,
}

#[derive(Clone)]
pub struct FetchPredictionClient {
    endpoint: String,
}

impl FetchPredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// `<body data-endpoint="...">` があればそれを使う
    pub fn from_document() -> Self {
        let endpoint = document()
            .body()
            .and_then(|body| body.get_attribute("data-endpoint"))
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    async fn post_image(&self, file: &File) -> std::result::Result<RawResponse, JsValue> {
        let form = FormData::new()?;
        form.append_with_blob(FIELD_NAME, file)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let text = JsFuture::from(resp.text()?).await?;
        let body = text
            .as_string()
            .ok_or_else(|| JsValue::from_str("response body is not text"))?;

        Ok(RawResponse {
            ok: resp.ok(),
            status: resp.status(),
            body,
        })
    }
}

impl PredictionClient<BrowserFile> for FetchPredictionClient {
    async fn predict(&self, file: &BrowserFile) -> Result<Prediction> {
        let response = self.post_image(file.as_file()).await.map_err(js_error)?;
        parse_http_response(response.ok, response.status, &response.body)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
