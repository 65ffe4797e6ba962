//! Persisted external-API response cache document.
//!
//! Keyed by `(api_source, query_hash)`. Distinct from the Redis cache
//! layer: this one survives restarts, and MongoDB's TTL monitor reaps
//! documents once `expires_at` passes.

use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::{DateTime, Duration, Utc};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use serde::{Deserialize, Serialize};

use crate::IntoIndexes;

/// Collection name for cached API responses.
pub const CACHED_API_RESPONSES_COLLECTION: &str = "cached_api_responses";

/// Cached response document stored in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedApiResponse {
    /// MongoDB document ID.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Upstream provider: "yelp", "google_places", "wikipedia", ...
    pub api_source: String,
    /// Hash of the query parameters.
    pub query_hash: String,

    /// Raw response payload.
    pub response_data: Document,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub cached_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub expires_at: DateTime<Utc>,
}

impl CachedApiResponse {
    /// Cache a payload for `ttl` from now.
    pub fn new(
        api_source: impl Into<String>,
        query_hash: impl Into<String>,
        response_data: Document,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            api_source: api_source.into(),
            query_hash: query_hash.into(),
            response_data,
            cached_at: now,
            expires_at: now + ttl,
        }
    }

    /// Whether the entry has outlived its expiry. The TTL monitor runs
    /// on a cycle, so expired documents can still be read briefly.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

impl IntoIndexes for CachedApiResponse {
    fn indexes() -> Vec<IndexModel> {
        vec![
            IndexModel::builder().keys(doc! { "api_source": 1 }).build(),
            IndexModel::builder().keys(doc! { "query_hash": 1 }).build(),
            // expireAfterSeconds = 0: the document's own expires_at is
            // the deadline.
            IndexModel::builder()
                .keys(doc! { "expires_at": 1 })
                .options(
                    IndexOptions::builder()
                        .expire_after(std::time::Duration::from_secs(0))
                        .build(),
                )
                .build(),
        ]
    }
}
