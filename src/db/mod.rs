//! Record store access. Consumers take any [`RecordStore`] so the HTTP
//! client can be swapped for an in-memory one.

mod pocketbase;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::ApiResult;

pub use pocketbase::PocketBase;

#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Fails when the record does not exist.
    async fn get_one(&self, collection: &str, id: &str) -> ApiResult<Record>;

    /// Every record of `collection`, in the order the store applies for
    /// `options.sort`.
    async fn get_full_list(
        &self,
        collection: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Record>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Comma separated field names, `-` prefix for descending, e.g. `-created`.
    pub sort: Option<String>,
}

impl ListOptions {
    pub fn sorted(sort: &str) -> ListOptions {
        ListOptions {
            sort: Some(sort.to_owned()),
        }
    }
}

/// A stored record. The system fields are typed; the collection's own schema
/// stays opaque in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub collection_id: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        parse_timestamp(&self.created)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Store timestamps look like `2024-05-01 10:00:00.123Z`; RFC 3339 is
/// accepted too.
pub fn parse_timestamp(s: &str) -> Option<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]Z");
    PrimitiveDateTime::parse(s, format)
        .map(PrimitiveDateTime::assume_utc)
        .or_else(|_| OffsetDateTime::parse(s, &Rfc3339))
        .ok()
}
