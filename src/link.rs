use tracing::{debug, warn};

/// Best-effort reachability probe: GETs `url` and reports whether the status
/// is in `200..300`. Never fails; any transport problem (bad URL, DNS,
/// refused connection) is logged and reported as `false`.
pub async fn check_link(http: &reqwest::Client, url: &str) -> bool {
    match http.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            debug!(url, status = status.as_u16(), "link checked");
            status.is_success()
        }
        Err(err) => {
            warn!(url, %err, "error checking link");
            false
        }
    }
}

impl crate::ApiClient {
    pub async fn check_link(&self, url: &str) -> bool {
        check_link(self.http(), url).await
    }
}
