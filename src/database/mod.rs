pub mod memory;
pub mod mongo;
pub mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{Collection, DatabaseError, DocumentStore, FindQuery};
