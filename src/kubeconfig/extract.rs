//! Pulls the kubeconfig payload out of secret data.

use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::secret::SecretData;

use super::KUBECONFIG_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyExtractor {
    key: String,
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::new(KUBECONFIG_KEY)
    }
}

impl KeyExtractor {
    /// A blank key falls back to [`KUBECONFIG_KEY`]; Secret data keys are
    /// never empty.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.trim().is_empty() {
            debug!("Blank kubeconfig key, using '{}'", KUBECONFIG_KEY);
            return Self {
                key: KUBECONFIG_KEY.to_string(),
            };
        }
        Self { key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Look up the payload bytes. A present but empty value is returned as-is;
    /// rejecting it is the parser's job.
    pub fn extract<'a>(&self, data: &'a SecretData) -> Result<&'a [u8]> {
        data.get(&self.key)
            .map(Vec::as_slice)
            .ok_or_else(|| ResolveError::MissingKubeconfigKey {
                key: self.key.clone(),
            })
    }
}
