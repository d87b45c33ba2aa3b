use serde::Serialize;

use crate::{ApiClient, ApiResult};

#[derive(Serialize)]
struct CreateMessageRequest<'a> {
    message: &'a str,
}

impl ApiClient {
    /// Stores `content` on the server and returns the response body as-is,
    /// normally the identifier to hand to [`ApiClient::view_message`].
    pub async fn create_message(&self, content: &str) -> ApiResult<String> {
        self.post_text(
            "create message",
            "/create",
            &CreateMessageRequest { message: content },
        )
        .await
    }
}
