use reqwest::RequestBuilder;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{ApiResult, api::check_status, config::normalize_base_url};

use super::{ListOptions, Record, RecordStore};

/// Page size used when walking a full list.
const BATCH: usize = 500;

/// HTTP client for a PocketBase record store.
#[derive(Debug, Clone)]
pub struct PocketBase {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    /// The store may clamp the requested page size.
    per_page: Option<usize>,
    #[serde(default)]
    items: Vec<Record>,
}

impl PocketBase {
    pub fn new(base_url: &str) -> PocketBase {
        PocketBase::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> PocketBase {
        PocketBase {
            http,
            base_url: normalize_base_url(base_url),
        }
    }

    fn records_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{collection}/records", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let result: ApiResult<T> = async {
            let response = check_status(request.send().await?).await?;
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        }
        .await;

        result.inspect_err(|err| error!(op, %err, "record store call failed"))
    }
}

impl RecordStore for PocketBase {
    async fn get_one(&self, collection: &str, id: &str) -> ApiResult<Record> {
        let url = format!("{}/{id}", self.records_url(collection));
        self.fetch("get one", self.http.get(url)).await
    }

    async fn get_full_list(
        &self,
        collection: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Record>> {
        let url = self.records_url(collection);
        let mut records = Vec::new();
        let mut page = 1usize;

        loop {
            let mut query = vec![
                ("page", page.to_string()),
                ("perPage", BATCH.to_string()),
                ("skipTotal", "1".to_owned()),
            ];
            if let Some(sort) = &options.sort {
                query.push(("sort", sort.clone()));
            }

            let ListPage { per_page, items } = self
                .fetch("get full list", self.http.get(&url).query(&query))
                .await?;
            let done = items.is_empty() || items.len() < per_page.unwrap_or(BATCH);
            records.extend(items);
            if done {
                break;
            }
            page += 1;
        }

        debug!(collection, count = records.len(), pages = page, "fetched full list");
        Ok(records)
    }
}
