//! 推論サービスHTTPクライアント
//!
//! 画像を multipart/form-data の1フィールドで POST し、
//! `{class, confidence}` を受け取る。リトライはしない。

use crate::config::Config;
use crate::error::Result;
use crate::image_file::LocalImage;
use photo_classify_common::{parse_http_response, Error, ImageFile, Prediction, PredictionClient};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
    field_name: String,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>, field_name: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
            field_name: field_name.into(),
        })
    }

    pub fn from_config(config: &Config, endpoint_override: Option<&str>) -> Result<Self> {
        let endpoint = config.resolve_endpoint(endpoint_override)?;
        Self::new(
            endpoint,
            config.field_name.clone(),
            config.timeout_seconds.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, file: &LocalImage) -> photo_classify_common::Result<Prediction> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(transport)?;
        let form = Form::new().part(self.field_name.clone(), part);

        tracing::debug!(endpoint = %self.endpoint, file = file.name(), "sending prediction request");
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(%status, bytes = body.len(), "prediction response received");

        parse_http_response(status.is_success(), status.as_u16(), &body)
    }
}

impl PredictionClient<LocalImage> for HttpPredictionClient {
    async fn predict(&self, file: &LocalImage) -> photo_classify_common::Result<Prediction> {
        self.send(file).await
    }
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}
