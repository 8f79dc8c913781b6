use std::sync::Mutex;

use async_trait::async_trait;

use super::backend::{StorageBackend, StoreSnapshot};
use crate::error::StoreError;

/// Process-local backend, used for `--memory` runs and tests
#[derive(Debug, Default)]
pub struct MemoryBackend {
    snapshot: Mutex<Option<StoreSnapshot>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<StoreSnapshot>>, StoreError> {
        self.snapshot
            .lock()
            .map_err(|_| StoreError::Unavailable("memory backend lock poisoned".to_string()))
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<StoreSnapshot>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        *self.lock()? = Some(snapshot.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
