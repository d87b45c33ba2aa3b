use serde::Serialize;

use crate::{ApiClient, ApiResult, GetField, api::logged};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinRoomRequest<'a> {
    room_id: &'a str,
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaveRoomRequest<'a> {
    room_id: &'a str,
    user_id: &'a str,
}

impl ApiClient {
    /// Returns the server's confirmation message.
    pub async fn join_room(
        &self,
        room_id: &str,
        user_id: &str,
        password: Option<&str>,
    ) -> ApiResult<String> {
        const OP: &str = "join room";

        let body = self
            .post_json(
                OP,
                "/room/join",
                &JoinRoomRequest {
                    room_id,
                    user_id,
                    password,
                },
            )
            .await?;
        logged(OP, body.get_str_field("message"))
    }

    pub async fn leave_room(&self, room_id: &str, user_id: &str) -> ApiResult<String> {
        const OP: &str = "leave room";

        let body = self
            .post_json(OP, "/room/leave", &LeaveRoomRequest { room_id, user_id })
            .await?;
        logged(OP, body.get_str_field("message"))
    }
}
