use async_trait::async_trait;
use bson::{doc, Document};
use thiserror::Error;

/// Errors from the document store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

impl From<bson::ser::Error> for DatabaseError {
    fn from(err: bson::ser::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}

/// The three collections this service writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    DailyUpdates,
    MissedCalls,
    CallSummaries,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::DailyUpdates => "daily_updates",
            Collection::MissedCalls => "missed_calls",
            Collection::CallSummaries => "call_summaries",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Equality filter plus an optional field whitelist.
///
/// The store identifier `_id` is never part of the result. Results are
/// ordered by `created_at` ascending, ties by `_id` ascending.
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    pub filter: Document,
    pub fields: Option<Vec<&'static str>>,
}

impl FindQuery {
    /// Every document in the collection
    pub fn all() -> Self {
        Self::default()
    }

    /// Documents whose fields equal every entry of `filter`
    pub fn matching(filter: Document) -> Self {
        Self { filter, fields: None }
    }

    /// Restrict returned documents to `fields`
    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields = Some(fields.to_vec());
        self
    }

    /// Mongo projection document for this query
    pub fn projection(&self) -> Document {
        let mut projection = doc! { "_id": 0 };
        if let Some(fields) = &self.fields {
            for field in fields {
                projection.insert(*field, 1);
            }
        }
        projection
    }

    pub fn sort_order() -> Document {
        doc! { "created_at": 1, "_id": 1 }
    }
}

/// Durable, collection-oriented storage shared by all requests
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its generated identifier as a string
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<String, DatabaseError>;

    async fn find(
        &self,
        collection: Collection,
        query: FindQuery,
    ) -> Result<Vec<Document>, DatabaseError>;

    /// Round-trip to the backing store
    async fn ping(&self) -> Result<(), DatabaseError>;
}
