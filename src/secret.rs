//! Secret retrieval capability consumed by the resolver.

pub mod cluster;
pub mod memory;
pub mod reference;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

pub use cluster::KubeSecretSource;
pub use memory::{MemorySecretSource, MemorySourceError};
pub use reference::KubeconfigSecretRef;

/// Contents of a fetched secret: key -> raw bytes.
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// Something that can fetch a secret's data by name.
///
/// Implementations report failures through their own error type; the resolver
/// wraps it into [`ResolveError::SecretFetch`](crate::ResolveError::SecretFetch)
/// without interpreting it.
#[async_trait]
pub trait SecretSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self, name: &str) -> Result<SecretData, Self::Error>;
}

#[async_trait]
impl<'a, S: SecretSource + ?Sized> SecretSource for &'a S {
    type Error = S::Error;

    async fn get(&self, name: &str) -> Result<SecretData, Self::Error> {
        (**self).get(name).await
    }
}

#[async_trait]
impl<S: SecretSource + ?Sized> SecretSource for Arc<S> {
    type Error = S::Error;

    async fn get(&self, name: &str) -> Result<SecretData, Self::Error> {
        (**self).get(name).await
    }
}
