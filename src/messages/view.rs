use serde::Serialize;

use crate::{ApiClient, ApiResult};

#[derive(Serialize)]
struct ViewMessageRequest<'a> {
    message: &'a str,
}

impl ApiClient {
    /// Fetches the plaintext of a message created with
    /// [`ApiClient::create_message`].
    pub async fn view_message(&self, id: &str) -> ApiResult<String> {
        self.post_text("view message", "/view", &ViewMessageRequest { message: id })
            .await
    }
}
