pub mod memory;

use anyhow::Result;

use crate::schemas::Movie;

pub use memory::MemoryStore;

/// Storage collaborator for the movie catalog.
///
/// The router and service only require a found/absent distinction from
/// lookups; error semantics and consistency are owned by the implementation.
#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Movie>>;
    async fn get(&self, id: i64) -> Result<Option<Movie>>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Movie>>;
    async fn insert(&self, movie: Movie) -> Result<Movie>;
    async fn update(&self, id: i64, movie: Movie) -> Result<bool>;
    async fn delete(&self, id: i64) -> Result<bool>;
}
