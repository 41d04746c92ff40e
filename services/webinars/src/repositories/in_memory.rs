//! In-memory webinar repository

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use tracing::debug;

use super::{RepositoryError, RepositoryResult, WebinarRepository};
use crate::models::Webinar;

/// Webinar repository backed by a map, for tests and local runs
#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: RwLock<HashMap<String, Webinar>>,
}

impl InMemoryWebinarRepository {
    /// Create a repository seeded with `webinars`
    pub fn new(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let webinars = webinars
            .into_iter()
            .map(|webinar| (webinar.id().to_string(), webinar))
            .collect();

        Self {
            webinars: RwLock::new(webinars),
        }
    }

    /// Store `webinar`, replacing any webinar with the same id
    pub fn insert(&self, webinar: Webinar) -> RepositoryResult<()> {
        self.write()?.insert(webinar.id().to_string(), webinar);
        Ok(())
    }

    /// Synchronous lookup
    pub fn find_by_id_sync(&self, id: &str) -> RepositoryResult<Option<Webinar>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, HashMap<String, Webinar>>> {
        self.webinars
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, HashMap<String, Webinar>>> {
        self.webinars
            .write()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Webinar>> {
        debug!("Finding webinar by ID: {}", id);
        self.find_by_id_sync(id)
    }

    async fn update(&self, webinar: &Webinar) -> RepositoryResult<()> {
        debug!("Updating webinar: {}", webinar.id());

        let mut webinars = self.write()?;
        match webinars.get_mut(webinar.id()) {
            Some(stored) => {
                *stored = webinar.clone();
                Ok(())
            }
            None => Err(RepositoryError::Missing(webinar.id().to_string())),
        }
    }
}
