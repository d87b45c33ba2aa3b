use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiResult, GetField, api::logged};

use super::RoomMessage;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    room_id: &'a str,
    user_id: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    messages: Option<Vec<RoomMessage>>,
}

impl ApiClient {
    /// Posts `content` into a room as `user_id`. Returns the id the server
    /// assigned; a success response without one, or with an empty one, is an
    /// error.
    pub async fn send_message(
        &self,
        room_id: &str,
        user_id: &str,
        content: &str,
    ) -> ApiResult<String> {
        const OP: &str = "send message";

        let body = self
            .post_json(
                OP,
                "/room/message",
                &SendMessageRequest {
                    room_id,
                    user_id,
                    message: content,
                },
            )
            .await?;
        logged(OP, body.get_nonempty_str_field("message"))
    }

    /// Full history of a room in server order. A response without a
    /// `messages` field means an empty room.
    pub async fn get_messages(&self, room_id: &str) -> ApiResult<Vec<RoomMessage>> {
        const OP: &str = "get messages";

        let body = self
            .get_json(OP, &["room", room_id, "messages"])
            .await?;
        let MessagesResponse { messages } =
            logged(OP, serde_json::from_value(body).map_err(Into::into))?;
        Ok(messages.unwrap_or_default())
    }
}
