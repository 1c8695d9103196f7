use std::collections::HashMap;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use super::store::{Collection, DatabaseError, DocumentStore, FindQuery};

/// In-process document store with the same query semantics as [`super::MongoStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents stored in `collection`
    pub async fn count(&self, collection: Collection) -> usize {
        let collections = self.collections.read().await;
        collections.get(&collection).map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<String, DatabaseError> {
        let id = ObjectId::new();

        let mut stored = Document::new();
        stored.insert("_id", id);
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(stored);

        Ok(id.to_hex())
    }

    async fn find(
        &self,
        collection: Collection,
        query: FindQuery,
    ) -> Result<Vec<Document>, DatabaseError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&Document> = documents
            .iter()
            .filter(|document| matches(document, &query.filter))
            .collect();

        // Stable sort keeps insertion order, which is `_id` order for ObjectIds minted here
        matched.sort_by_key(|document| document.get_datetime("created_at").ok().copied());

        Ok(matched
            .into_iter()
            .map(|document| project(document, query.fields.as_deref()))
            .collect())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn project(document: &Document, fields: Option<&[&'static str]>) -> Document {
    document
        .iter()
        .filter(|(key, _)| key.as_str() != "_id")
        .filter(|(key, _)| fields.map_or(true, |fields| fields.iter().any(|f| *f == key.as_str())))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
