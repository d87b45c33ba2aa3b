use crate::{ApiResult, ListOptions, Record, RecordStore};

pub const COLLECTION: &str = "notifications";

/// Notification schema is owned by the store.
pub type Notification = Record;

pub async fn get_notification<S: RecordStore>(store: &S, id: &str) -> ApiResult<Notification> {
    store.get_one(COLLECTION, id).await
}

/// All notifications, newest first.
pub async fn fetch_all_notifications<S: RecordStore>(store: &S) -> ApiResult<Vec<Notification>> {
    store
        .get_full_list(COLLECTION, &ListOptions::sorted("-created"))
        .await
}
