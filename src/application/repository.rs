//! Application lookup.
//!
//! The document engine only ever reads through [`ApplicationRepository`];
//! records are fetched fresh for every request.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::model::{Application, ApplicationId};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("application store unavailable: {0}")]
    Unavailable(String),
    #[error("application store is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Zero or one application for the identifier.
    async fn find(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
}

/// Map-backed store used by fixtures and tests.
#[derive(Clone, Default)]
pub struct InMemoryApplicationRepository {
    applications: Arc<RwLock<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_applications(applications: impl IntoIterator<Item = Application>) -> Self {
        let map: HashMap<ApplicationId, Application> = applications
            .into_iter()
            .map(|application| (application.id, application))
            .collect();
        Self {
            applications: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn insert(&self, application: Application) {
        let mut applications = self.applications.write().await;
        applications.insert(application.id, application);
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let applications = self.applications.read().await;
        Ok(applications.get(id).cloned())
    }
}

/// Reads a JSON array of applications from disk on every lookup.
pub struct JsonFileApplicationRepository {
    path: PathBuf,
}

impl JsonFileApplicationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ApplicationRepository for JsonFileApplicationRepository {
    async fn find(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            RepositoryError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let applications: Vec<Application> = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Corrupt(format!("{}: {}", self.path.display(), e)))?;

        let mut matches = applications.into_iter().filter(|a| &a.id == id);
        let found = matches.next();
        if matches.next().is_some() {
            log::warn!(
                "duplicate application records for id {} in {}; using the first",
                id,
                self.path.display()
            );
        }

        Ok(found)
    }
}
