//! Room endpoints. Membership and the password gate on private rooms are
//! enforced by the server; this side only forwards the values.

mod membership;
mod new;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Public,
    /// Needs a password to create and to join.
    Private,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        use RoomType::*;
        match self {
            Public => "public",
            Private => "private",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown room type {0:?}, expected public or private")]
pub struct UnknownRoomType(pub String);

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(RoomType::Public),
            "private" => Ok(RoomType::Private),
            other => Err(UnknownRoomType(other.to_owned())),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
