use serde::Serialize;
use tracing::debug;

use crate::{ApiClient, ApiResult, GetField, api::logged};

use super::RoomType;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewRoomRequest<'a> {
    user_id: &'a str,
    #[serde(rename = "type")]
    room_type: RoomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

impl ApiClient {
    /// Opens a room owned by `user_id` and returns its id.
    pub async fn create_room(
        &self,
        user_id: &str,
        room_type: RoomType,
        password: Option<&str>,
    ) -> ApiResult<String> {
        const OP: &str = "create room";

        debug!(user_id, %room_type, "creating room");

        let body = self
            .post_json(
                OP,
                "/room/create",
                &NewRoomRequest {
                    user_id,
                    room_type,
                    password,
                },
            )
            .await?;
        logged(OP, body.get_str_field("roomId"))
    }
}
