//! In-memory secret source.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use super::{SecretData, SecretSource};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemorySourceError {
    #[error("Secret not found: {0}")]
    NotFound(String),
}

/// Fixed set of secrets held in memory, mostly useful as a test double.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretSource {
    secrets: HashMap<String, SecretData>,
}

impl MemorySecretSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_secret(mut self, name: impl Into<String>, data: SecretData) -> Self {
        self.secrets.insert(name.into(), data);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, data: SecretData) {
        self.secrets.insert(name.into(), data);
    }
}

#[async_trait]
impl SecretSource for MemorySecretSource {
    type Error = MemorySourceError;

    async fn get(&self, name: &str) -> Result<SecretData, Self::Error> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| MemorySourceError::NotFound(name.to_string()))
    }
}
