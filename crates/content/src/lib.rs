//! Flexible store: a process-wide MongoDB client scoped to one logical
//! database, plus the document schemas that live in it.
//!
//! Documents here are schema-on-read. Cross-store references into the
//! structured store (`poi_id`, `trip_id`) are opaque strings with no
//! enforced integrity.

pub mod documents;

use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database, IndexModel};

use documents::cached_response::{CachedApiResponse, CACHED_API_RESPONSES_COLLECTION};
use documents::poi_content::{PoiContent, POI_CONTENT_COLLECTION};
use documents::trip_collaboration::{TripCollaboration, TRIP_COLLABORATION_COLLECTION};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("MongoDB driver error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

/// Index declarations for a document type, applied at startup before
/// any query depends on them.
pub trait IntoIndexes {
    fn indexes() -> Vec<IndexModel>;
}

/// Handle to the content database. Cheap to clone; the underlying
/// driver client is a connection pool and safe for concurrent use.
#[derive(Clone)]
pub struct ContentStore {
    client: Client,
    db_name: String,
}

impl ContentStore {
    /// Parse the connection string and build the client.
    ///
    /// The driver connects lazily, so this does not contact the server;
    /// call [`ping`](Self::ping) to verify reachability. Short server
    /// selection timeouts keep an unreachable deployment from hanging
    /// startup.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, ContentError> {
        let sep = if uri.contains('?') { '&' } else { '?' };
        let uri = format!("{uri}{sep}serverSelectionTimeoutMS=3000&connectTimeoutMS=3000");
        let client = Client::with_uri_str(&uri).await?;

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// The logical database all content collections live in.
    pub fn database(&self) -> Database {
        self.client.database(&self.db_name)
    }

    /// Typed collection handle within the content database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database().collection::<T>(name)
    }

    /// Liveness probe (`ping` admin command against the database).
    pub async fn ping(&self) -> Result<(), ContentError> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Create every declared index. Idempotent; must complete before
    /// the application starts serving traffic.
    pub async fn init_indexes(&self) -> Result<(), ContentError> {
        self.apply_indexes::<PoiContent>(POI_CONTENT_COLLECTION).await?;
        self.apply_indexes::<TripCollaboration>(TRIP_COLLABORATION_COLLECTION)
            .await?;
        self.apply_indexes::<CachedApiResponse>(CACHED_API_RESPONSES_COLLECTION)
            .await?;
        tracing::info!(db = %self.db_name, "Content indexes ensured");
        Ok(())
    }

    async fn apply_indexes<T>(&self, collection_name: &str) -> Result<(), ContentError>
    where
        T: IntoIndexes + Send + Sync,
    {
        let indexes = T::indexes();
        if indexes.is_empty() {
            return Ok(());
        }
        self.collection::<T>(collection_name)
            .create_indexes(indexes)
            .await?;
        Ok(())
    }

    /// Store a point-of-interest document.
    pub async fn insert_poi_content(&self, poi: &PoiContent) -> Result<(), ContentError> {
        self.collection::<PoiContent>(POI_CONTENT_COLLECTION)
            .insert_one(poi)
            .await?;
        Ok(())
    }

    /// Points of interest near a coordinate, closest first. Relies on
    /// the `2dsphere` index created by [`init_indexes`](Self::init_indexes).
    pub async fn find_poi_near(
        &self,
        latitude: f64,
        longitude: f64,
        max_distance_meters: f64,
    ) -> Result<Vec<PoiContent>, ContentError> {
        let filter = doc! {
            "location": {
                "$near": {
                    "$geometry": { "type": "Point", "coordinates": [longitude, latitude] },
                    "$maxDistance": max_distance_meters,
                }
            }
        };
        let cursor = self
            .collection::<PoiContent>(POI_CONTENT_COLLECTION)
            .find(filter)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch the live collaboration session for a trip, if one exists.
    pub async fn find_collaboration(
        &self,
        trip_id: &str,
    ) -> Result<Option<TripCollaboration>, ContentError> {
        let found = self
            .collection::<TripCollaboration>(TRIP_COLLABORATION_COLLECTION)
            .find_one(doc! { "trip_id": trip_id })
            .await?;
        Ok(found)
    }

    /// Look up a persisted external-API response by its cache key.
    pub async fn find_cached_response(
        &self,
        api_source: &str,
        query_hash: &str,
    ) -> Result<Option<CachedApiResponse>, ContentError> {
        let found = self
            .collection::<CachedApiResponse>(CACHED_API_RESPONSES_COLLECTION)
            .find_one(doc! { "api_source": api_source, "query_hash": query_hash })
            .await?;
        Ok(found)
    }

    /// Persist an external-API response; the TTL index reaps it after
    /// `expires_at`.
    pub async fn insert_cached_response(
        &self,
        response: &CachedApiResponse,
    ) -> Result<(), ContentError> {
        self.collection::<CachedApiResponse>(CACHED_API_RESPONSES_COLLECTION)
            .insert_one(response)
            .await?;
        Ok(())
    }
}
