use super::model::{Movie, NewMovie};
use super::repository::MovieStore;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Movie store backed by process memory. Same observable contract as the
/// Postgres store; used by the integration tests and for running without
/// a database.
#[derive(Default)]
pub struct InMemoryMovieStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Movie>,
    last_id: i64,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let movie = Movie {
            id: inner.last_id,
            title: movie.title,
            genre: movie.genre,
            duration: movie.duration,
        };
        inner.rows.push(movie.clone());
        Ok(movie)
    }

    async fn list(&self, skip: i64, take: i64) -> Result<Vec<Movie>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .rows
            .iter()
            .skip(skip.max(0) as usize)
            .take(take.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|m| m.id == id).cloned())
    }

    async fn update(&self, movie: &Movie) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if let Some(row) = inner.rows.iter_mut().find(|m| m.id == movie.id) {
            *row = movie.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|m| m.id != id);
        Ok(inner.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.into(),
            genre: "Drama".into(),
            duration: 120,
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_increasing_ids() {
        let store = InMemoryMovieStore::new();
        let a = store.insert(new_movie("a")).await.unwrap();
        let b = store.insert(new_movie("b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let store = InMemoryMovieStore::new();
        let a = store.insert(new_movie("a")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.insert(new_movie("b")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn delete_of_absent_id_returns_false() {
        let store = InMemoryMovieStore::new();
        assert!(!store.delete(99).await.unwrap());
    }

    #[tokio::test]
    async fn list_honors_skip_and_take_in_insertion_order() {
        let store = InMemoryMovieStore::new();
        for i in 0..5 {
            store.insert(new_movie(&format!("m{i}"))).await.unwrap();
        }
        let page = store.list(2, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "m2");
        assert_eq!(page[1].title, "m3");
    }
}
