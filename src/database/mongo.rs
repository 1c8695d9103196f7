use std::time::Duration;

use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{
    options::{ClientOptions, FindOptions},
    Client, Database,
};
use tracing::info;

use super::store::{Collection, DatabaseError, DocumentStore, FindQuery};
use crate::config::DatabaseConfig;

/// MongoDB-backed document store. The driver pools connections internally,
/// so a single instance is shared by every request.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build a client from the configured connection string.
    ///
    /// The driver connects lazily; call [`DocumentStore::ping`] to verify
    /// the cluster is reachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let timeout = Duration::from_secs(config.connection_timeout);

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        info!("Created MongoDB client for database: {}", config.name);

        Ok(Self {
            database: client.database(&config.name),
        })
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.database.collection(collection.name())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<String, DatabaseError> {
        let result = self.collection(collection).insert_one(document, None).await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    async fn find(
        &self,
        collection: Collection,
        query: FindQuery,
    ) -> Result<Vec<Document>, DatabaseError> {
        let options = FindOptions::builder()
            .projection(query.projection())
            .sort(FindQuery::sort_order())
            .build();

        let cursor = self
            .collection(collection)
            .find(query.filter, options)
            .await?;

        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| DatabaseError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
