// handlers/mod.rs - one module per resource
//
// Public (no auth):  GET /, GET /health
// Protected (x-api-key): everything under /api
pub mod missed_calls;
pub mod root;
pub mod summaries;
pub mod updates;

pub use missed_calls::{list_missed_calls, log_missed_call};
pub use root::{health, root};
pub use summaries::save_summary;
pub use updates::{list_queries, list_updates, save_update};
