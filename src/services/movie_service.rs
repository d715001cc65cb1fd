use std::sync::Arc;

use anyhow::Result;

use crate::schemas::Movie;
use crate::store::MovieStore;

/// Thin pass-through over the storage collaborator.
///
/// Constructed once at startup and cloned into the router state; handlers
/// never build their own service.
#[derive(Clone)]
pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub async fn get_movies(&self) -> Result<Vec<Movie>> {
        self.store.get_all().await
    }

    pub async fn get_movie(&self, id: i64) -> Result<Option<Movie>> {
        self.store.get(id).await
    }

    pub async fn get_movies_by_category(&self, category: &str) -> Result<Vec<Movie>> {
        self.store.get_by_category(category).await
    }

    pub async fn create_movie(&self, movie: Movie) -> Result<Movie> {
        self.store.insert(movie).await
    }

    pub async fn update_movie(&self, id: i64, movie: Movie) -> Result<bool> {
        self.store.update(id, movie).await
    }

    pub async fn delete_movie(&self, id: i64) -> Result<bool> {
        self.store.delete(id).await
    }
}
