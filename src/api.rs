use reqwest::{RequestBuilder, Response, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::{ApiError, ApiResult, config::{Config, normalize_base_url}};

/// Handle on the messaging API. Cheap to clone; clones share one connection
/// pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiClient {
        ApiClient::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> ApiClient {
        ApiClient {
            http,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config(config: &Config) -> ApiClient {
        ApiClient::new(&config.api_url)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn segments_url(&self, segments: &[&str]) -> ApiResult<Url> {
        let invalid = || ApiError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// POSTs `body` as JSON and returns the raw response text.
    pub(crate) async fn post_text<B: Serialize + ?Sized>(
        &self,
        op: &'static str,
        path: &str,
        body: &B,
    ) -> ApiResult<String> {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(op, request).await
    }

    /// POSTs `body` as JSON and decodes the JSON response.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        op: &'static str,
        path: &str,
        body: &B,
    ) -> ApiResult<Value> {
        let text = self.post_text(op, path, body).await?;
        decode(op, &text)
    }

    /// GETs the path built from `segments`, each percent-encoded on its own.
    pub(crate) async fn get_json(&self, op: &'static str, segments: &[&str]) -> ApiResult<Value> {
        let url = logged(op, self.segments_url(segments))?;
        let request = self
            .http
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        let text = self.execute(op, request).await?;
        decode(op, &text)
    }

    async fn execute(&self, op: &'static str, request: RequestBuilder) -> ApiResult<String> {
        let result: ApiResult<String> = async {
            let response = request.send().await?;
            let response = check_status(response).await?;
            Ok(response.text().await?)
        }
        .await;

        match &result {
            Ok(text) => debug!(op, len = text.len(), "api call succeeded"),
            Err(err) => error!(op, %err, "api call failed"),
        }
        result
    }
}

/// Turns a non-2xx response into `ApiError::Request`, keeping whatever body
/// text the server sent.
pub(crate) async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok().filter(|b| !b.is_empty());
    error!(status = status.as_u16(), body = body.as_deref().unwrap_or(""), "api error");

    Err(ApiError::Request {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_owned(),
        body,
    })
}

fn decode(op: &'static str, text: &str) -> ApiResult<Value> {
    serde_json::from_str(text).map_err(|err| {
        error!(op, %err, "response was not json");
        ApiError::from(err)
    })
}

/// Logs an error that did not come from the HTTP exchange itself.
pub(crate) fn logged<T>(op: &'static str, result: ApiResult<T>) -> ApiResult<T> {
    result.inspect_err(|err| error!(op, %err, "api call failed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_encoded_one_by_one() {
        let api = ApiClient::new("http://host:8080/api/");
        let url = api.segments_url(&["room", "a/b?c#d", "messages"]).unwrap();
        assert_eq!(url.as_str(), "http://host:8080/api/room/a%2Fb%3Fc%23d/messages");

        let api = ApiClient::new("http://host");
        let url = api.segments_url(&["room", "r1", "messages"]).unwrap();
        assert_eq!(url.as_str(), "http://host/room/r1/messages");
    }

    #[test]
    fn base_without_path_support_is_rejected() {
        let api = ApiClient::new("mailto:someone@example.com");
        assert!(matches!(api.segments_url(&["room"]), Err(ApiError::InvalidUrl(_))));
    }
}
