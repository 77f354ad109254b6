//! End-to-end resolution: secret -> kubeconfig -> client configuration.

use kube::config::KubeConfigOptions;
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::kubeconfig::{ContextSelection, KeyExtractor, parse_kubeconfig};
use crate::secret::{KubeconfigSecretRef, SecretSource};

/// Resolves a `kube::Config` from a kubeconfig stored in a secret.
///
/// Holds no state between calls; the same inputs always produce the same
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    extractor: KeyExtractor,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the kubeconfig from `key` instead of `"kubeconfig"`. A blank key
    /// keeps the default.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.extractor = KeyExtractor::new(key);
        self
    }

    /// Fetch `secret_name` from `source` and build a client configuration for
    /// `context_name`, or for the document's current-context when it is empty.
    pub async fn resolve<S>(
        &self,
        source: &S,
        secret_name: &str,
        context_name: &str,
    ) -> Result<kube::Config>
    where
        S: SecretSource + ?Sized,
    {
        debug!("Resolving kubeconfig from secret {}", secret_name);

        let data = source
            .get(secret_name)
            .await
            .map_err(|e| ResolveError::secret_fetch(secret_name, e))?;

        let payload = self.extractor.extract(&data)?;
        let kubeconfig = parse_kubeconfig(payload)?;
        let context = ContextSelection::from_name(context_name).resolve(&kubeconfig)?;

        let options = KubeConfigOptions {
            context: Some(context.clone()),
            ..Default::default()
        };
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|source| ResolveError::ClientConfig {
                context: context.clone(),
                source,
            })?;

        debug!(
            "Resolved context {} from secret {} (server: {})",
            context, secret_name, config.cluster_url
        );

        Ok(config)
    }
}

/// Resolve with the default `"kubeconfig"` key.
pub async fn resolve<S>(source: &S, secret_name: &str, context_name: &str) -> Result<kube::Config>
where
    S: SecretSource + ?Sized,
{
    ConfigResolver::new()
        .resolve(source, secret_name, context_name)
        .await
}

/// Resolve the secret, key, and context named by `secret_ref`.
///
/// `secret_ref.namespace` is not consulted here; it is the source's concern
/// (see [`KubeSecretSource::for_ref`](crate::secret::KubeSecretSource::for_ref)).
pub async fn resolve_ref<S>(source: &S, secret_ref: &KubeconfigSecretRef) -> Result<kube::Config>
where
    S: SecretSource + ?Sized,
{
    ConfigResolver::new()
        .with_key(secret_ref.key.as_str())
        .resolve(source, &secret_ref.name, secret_ref.context_name())
        .await
}
