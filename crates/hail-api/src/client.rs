//! Thin HTTP client over the booking backend.
//!
//! Verbs return raw [`serde_json::Value`] bodies; shape normalization lives
//! in [`crate::envelope`] so every endpoint goes through the same unwrapping.

use reqwest::Response;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Shared HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        json_body(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        json_body(resp).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let resp = self.http.patch(self.url(path)).json(body).send().await?;
        json_body(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(path)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

/// Reject non-2xx responses, extracting the server's `error` / `message`
/// field when the body carries one.
async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<Value>(&body).ok())
        .and_then(|v| {
            let m = v.get("error").or_else(|| v.get("message"))?.as_str()?;
            Some(m.to_string())
        })
        .unwrap_or_else(|| format!("server responded {status}"));

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn json_body(resp: Response) -> Result<Value, ApiError> {
    let resp = check_status(resp).await?;
    Ok(resp.json::<Value>().await?)
}
