//! Message endpoints: one-off encrypted messages (`/create`, `/view`) and
//! room chat (`/room/message`, `/room/{id}/messages`).

mod create;
mod room;
mod view;

use serde::{Deserialize, Serialize};

/// One entry of a room's history as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMessage {
    pub sender: String,
    pub message: String,
}
