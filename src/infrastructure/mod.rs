pub mod document_repo;
pub mod memory_store;
pub mod models;

pub use document_repo::PgDocumentStore;
pub use memory_store::InMemoryDocumentStore;
