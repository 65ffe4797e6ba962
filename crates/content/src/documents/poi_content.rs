//! Point-of-interest document schema.
//!
//! One document per POI, keyed by an opaque `poi_id` that may point at
//! a structured-store row or an external provider ID. Facts, external
//! payloads, and metadata are open-ended BSON.

use bson::oid::ObjectId;
use bson::{doc, Document};
use mongodb::IndexModel;
use serde::{Deserialize, Serialize};

use crate::IntoIndexes;

/// Collection name for POI content.
pub const POI_CONTENT_COLLECTION: &str = "poi_content";

/// GeoJSON point, `coordinates` ordered `[longitude, latitude]` as the
/// `2dsphere` index requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }
}

/// POI document stored in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiContent {
    /// MongoDB document ID.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Cross-store or external POI identifier.
    pub poi_id: String,

    pub name: String,
    /// landmark, restaurant, gas_station, ...
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Geocoordinates, indexed for proximity queries.
    pub location: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,

    /// Open-ended fact records.
    #[serde(default)]
    pub facts: Vec<Document>,
    /// Raw payloads keyed by provider (Yelp, Google Places, ...).
    #[serde(default)]
    pub external_data: Document,
    /// Source info, fetch timestamps, and the like.
    #[serde(default)]
    pub metadata: Document,
    /// Trip-specific contexts this POI has been referenced in.
    #[serde(default)]
    pub trip_contexts: Vec<Document>,
}

fn default_country() -> String {
    "US".to_string()
}

impl PoiContent {
    /// Minimal POI with empty flexible content.
    pub fn new(poi_id: impl Into<String>, name: impl Into<String>, category: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            poi_id: poi_id.into(),
            name: name.into(),
            category: category.into(),
            subcategory: None,
            location: GeoPoint::new(latitude, longitude),
            address: None,
            city: None,
            state: None,
            country: default_country(),
            facts: Vec::new(),
            external_data: Document::new(),
            metadata: Document::new(),
            trip_contexts: Vec::new(),
        }
    }
}

impl IntoIndexes for PoiContent {
    fn indexes() -> Vec<IndexModel> {
        vec![
            IndexModel::builder()
                .keys(doc! { "location": "2dsphere" })
                .build(),
            IndexModel::builder().keys(doc! { "category": 1 }).build(),
            IndexModel::builder().keys(doc! { "poi_id": 1 }).build(),
        ]
    }
}
