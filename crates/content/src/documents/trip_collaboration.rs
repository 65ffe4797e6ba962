//! Live trip-collaboration session document.
//!
//! One document per trip, keyed by an opaque `trip_id` string. Shared
//! mutable state for multiple participants; last-writer-wins, no
//! conflict resolution beyond the driver's atomic document updates.

use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use serde::{Deserialize, Serialize};

use crate::IntoIndexes;

/// Collection name for collaboration sessions.
pub const TRIP_COLLABORATION_COLLECTION: &str = "trip_collaboration";

/// Collaboration session document stored in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCollaboration {
    /// MongoDB document ID.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Cross-store trip identifier.
    pub trip_id: String,

    /// Participant user identifiers.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Suggestions currently in flight.
    #[serde(default)]
    pub current_suggestions: Vec<Document>,
    /// Decisions awaiting the group.
    #[serde(default)]
    pub pending_decisions: Vec<Document>,
    /// Open-ended shared session state.
    #[serde(default)]
    pub shared_state: Document,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub last_updated: DateTime<Utc>,
}

impl TripCollaboration {
    /// Fresh, empty session for a trip.
    pub fn new(trip_id: impl Into<String>) -> Self {
        Self {
            id: None,
            trip_id: trip_id.into(),
            participants: Vec::new(),
            current_suggestions: Vec::new(),
            pending_decisions: Vec::new(),
            shared_state: Document::new(),
            last_updated: Utc::now(),
        }
    }
}

impl IntoIndexes for TripCollaboration {
    fn indexes() -> Vec<IndexModel> {
        vec![IndexModel::builder()
            .keys(doc! { "trip_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_id_index_is_unique() {
        let indexes = TripCollaboration::indexes();
        assert_eq!(indexes.len(), 1);
        assert_eq!(indexes[0].keys, doc! { "trip_id": 1 });
        assert_eq!(
            indexes[0].options.as_ref().and_then(|o| o.unique),
            Some(true)
        );
    }

    #[test]
    fn last_updated_serializes_as_bson_datetime() {
        let session = TripCollaboration::new("trip-42");
        let bson = bson::to_document(&session).unwrap();

        assert_eq!(bson.get_str("trip_id").unwrap(), "trip-42");
        assert!(matches!(
            bson.get("last_updated"),
            Some(bson::Bson::DateTime(_))
        ));
    }

    #[test]
    fn new_session_starts_empty() {
        let session = TripCollaboration::new("trip-7");
        assert!(session.participants.is_empty());
        assert!(session.current_suggestions.is_empty());
        assert!(session.pending_decisions.is_empty());
        assert!(session.shared_state.is_empty());
    }
}
