use std::collections::BTreeMap;

use anyhow::Result;
use tokio::sync::RwLock;

use super::MovieStore;
use crate::schemas::Movie;

/// In-memory movie catalog keyed by id.
///
/// BTreeMap keeps listings in id order. All mutations go through a single
/// RwLock, so each store call is atomic; the read-then-act pattern in the
/// handlers is still racy across calls under a concurrent client
/// (single-writer assumption).
pub struct MemoryStore {
    movies: RwLock<BTreeMap<i64, Movie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store pre-populated with a small catalog, used at startup so the API
    /// answers with data out of the box.
    pub fn seeded() -> Self {
        let mut movies = BTreeMap::new();
        for movie in seed_catalog() {
            // seed entries always carry ids
            if let Some(id) = movie.id {
                movies.insert(id, movie);
            }
        }
        Self {
            movies: RwLock::new(movies),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MovieStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.get(&id).cloned())
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies
            .values()
            .filter(|m| m.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, mut movie: Movie) -> Result<Movie> {
        let mut movies = self.movies.write().await;
        let id = match movie.id {
            Some(id) => id,
            None => movies.keys().next_back().map_or(1, |max| max + 1),
        };
        movie.id = Some(id);
        movies.insert(id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: i64, mut movie: Movie) -> Result<bool> {
        let mut movies = self.movies.write().await;
        if !movies.contains_key(&id) {
            return Ok(false);
        }
        movie.id = Some(id);
        movies.insert(id, movie);
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut movies = self.movies.write().await;
        Ok(movies.remove(&id).is_some())
    }
}

fn seed_catalog() -> Vec<Movie> {
    vec![
        Movie {
            id: Some(1),
            title: "Avatar".to_string(),
            overview: "En un exuberante planeta llamado Pandora viven los Na'vi".to_string(),
            year: 2009,
            rating: 7.8,
            category: "Acción".to_string(),
        },
        Movie {
            id: Some(2),
            title: "El Padrino".to_string(),
            overview: "Don Vito Corleone es el respetado jefe de una familia".to_string(),
            year: 1972,
            rating: 9.2,
            category: "Crimen".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: Option<i64>, category: &str) -> Movie {
        Movie {
            id,
            title: "Interstellar".to_string(),
            overview: "Un grupo de exploradores viaja a través de un agujero".to_string(),
            year: 2014,
            rating: 8.7,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id() {
        let store = MemoryStore::new();
        let first = store.insert(sample(None, "Ciencia ficción")).await.unwrap();
        let second = store.insert(sample(None, "Ciencia ficción")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let store = MemoryStore::new();
        assert!(store.get(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_category_filter_may_be_empty() {
        let store = MemoryStore::seeded();
        let hits = store.get_by_category("Acción").await.unwrap();
        assert_eq!(hits.len(), 1);
        let misses = store.get_by_category("Documental").await.unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_update_absent_returns_false() {
        let store = MemoryStore::new();
        assert!(!store.update(9, sample(None, "Drama")).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_overwrites_and_pins_id() {
        let store = MemoryStore::seeded();
        let ok = store.update(1, sample(Some(99), "Drama")).await.unwrap();
        assert!(ok);
        let stored = store.get(1).await.unwrap().unwrap();
        assert_eq!(stored.id, Some(1));
        assert_eq!(stored.category, "Drama");
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = MemoryStore::seeded();
        assert!(store.delete(1).await.unwrap());
        assert!(store.get(1).await.unwrap().is_none());
        assert!(!store.delete(1).await.unwrap());
    }
}
