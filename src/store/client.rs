//! MongoDB persistence for status checks and generated assets.
//!
//! One `Store` handle is created at process start and shut down once at
//! exit; the driver pools connections internally, so the handle is shared
//! freely across concurrent requests with no extra locking.
//!
//! Documents carry their timestamps as ISO-8601 strings and the store
//! enforces no schema, so reads go through raw document types whose
//! timestamp fields are parsed defensively: a missing or malformed value
//! falls back to the Unix epoch with a warning, and the record is kept.
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{GeneratedAsset, StatusCheck};

/// Listing caps, matching the API contract.
pub const STATUS_CHECK_LIST_CAP: i64 = 1000;
pub const GENERATED_ASSET_LIST_CAP: i64 = 100;

const STATUS_CHECKS: &str = "status_checks";
const GENERATED_ASSETS: &str = "generated_assets";

/// Stored shape of a status check. The timestamp is a string on disk.
#[derive(Debug, Serialize, Deserialize)]
struct StatusCheckDocument {
    id: String,
    client_name: String,
    #[serde(default)]
    timestamp: String,
}

impl StatusCheckDocument {
    fn from_record(record: &StatusCheck) -> Self {
        Self {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: record.timestamp.to_rfc3339(),
        }
    }

    fn into_record(self) -> StatusCheck {
        let timestamp = parse_stored_timestamp(&self.timestamp, &self.id, "timestamp");
        StatusCheck {
            id: self.id,
            client_name: self.client_name,
            timestamp,
        }
    }
}

/// Stored shape of a generated asset.
#[derive(Debug, Serialize, Deserialize)]
struct GeneratedAssetDocument {
    id: String,
    asset_type: String,
    prompt: String,
    image_base64: String,
    #[serde(default)]
    created_at: String,
}

impl GeneratedAssetDocument {
    fn from_record(record: &GeneratedAsset) -> Self {
        Self {
            id: record.id.clone(),
            asset_type: record.asset_type.clone(),
            prompt: record.prompt.clone(),
            image_base64: record.image_base64.clone(),
            created_at: record.created_at.to_rfc3339(),
        }
    }

    fn into_record(self) -> GeneratedAsset {
        let created_at = parse_stored_timestamp(&self.created_at, &self.id, "created_at");
        GeneratedAsset {
            id: self.id,
            asset_type: self.asset_type,
            prompt: self.prompt,
            image_base64: self.image_base64,
            created_at,
        }
    }
}

/// Parse an ISO-8601 timestamp read back from the store. Unparseable values
/// default to the Unix epoch; the record itself is never dropped.
fn parse_stored_timestamp(raw: &str, id: &str, field: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(_) => {
            tracing::warn!(
                "record {}: unparseable {} {:?}, defaulting to Unix epoch",
                id,
                field,
                raw
            );
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

#[derive(Clone)]
pub struct Store {
    client: MongoClient,
    db: Database,
}

impl Store {
    /// Connect to MongoDB and verify the deployment answers a ping.
    ///
    /// On ping failure the client is shut down before the error is returned,
    /// so a half-initialized handle never escapes.
    pub async fn connect(uri: &str, database: &str) -> AppResult<Self> {
        tracing::info!("connecting to MongoDB at {}", uri);
        let client = MongoClient::with_uri_str(uri).await?;
        let db = client.database(database);
        let store = Store { client, db };
        if let Err(e) = store.ping().await {
            tracing::error!("MongoDB ping failed: {}", e);
            store.client.shutdown().await;
            return Err(e);
        }
        tracing::info!("connected to MongoDB database '{}'", database);
        Ok(store)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    fn status_checks(&self) -> Collection<StatusCheckDocument> {
        self.db.collection(STATUS_CHECKS)
    }

    fn generated_assets(&self) -> Collection<GeneratedAssetDocument> {
        self.db.collection(GENERATED_ASSETS)
    }

    pub async fn insert_status_check(&self, record: &StatusCheck) -> AppResult<()> {
        self.status_checks()
            .insert_one(StatusCheckDocument::from_record(record), None)
            .await?;
        Ok(())
    }

    /// List stored status checks, capped at [`STATUS_CHECK_LIST_CAP`],
    /// stored order.
    pub async fn list_status_checks(&self) -> AppResult<Vec<StatusCheck>> {
        let options = FindOptions::builder()
            .limit(STATUS_CHECK_LIST_CAP)
            .projection(doc! { "_id": 0 })
            .build();
        let cursor = self.status_checks().find(doc! {}, options).await?;
        let documents: Vec<StatusCheckDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(StatusCheckDocument::into_record).collect())
    }

    pub async fn insert_generated_asset(&self, record: &GeneratedAsset) -> AppResult<()> {
        self.generated_assets()
            .insert_one(GeneratedAssetDocument::from_record(record), None)
            .await?;
        Ok(())
    }

    /// List stored assets, capped at [`GENERATED_ASSET_LIST_CAP`], stored
    /// order.
    pub async fn list_generated_assets(&self) -> AppResult<Vec<GeneratedAsset>> {
        let options = FindOptions::builder()
            .limit(GENERATED_ASSET_LIST_CAP)
            .projection(doc! { "_id": 0 })
            .build();
        let cursor = self.generated_assets().find(doc! {}, options).await?;
        let documents: Vec<GeneratedAssetDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(GeneratedAssetDocument::into_record).collect())
    }

    /// Release the underlying client. Call once, at process exit.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
