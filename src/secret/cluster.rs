//! Secret source backed by the Kubernetes API.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::Api;
use tracing::debug;

use super::{KubeconfigSecretRef, SecretData, SecretSource};

/// Reads secrets from a single namespace through `Api<Secret>`.
#[derive(Clone)]
pub struct KubeSecretSource {
    api: Api<Secret>,
    namespace: String,
}

impl KubeSecretSource {
    pub fn new(client: kube::Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }

    /// Use the client's default namespace.
    pub fn default_namespaced(client: kube::Client) -> Self {
        let namespace = client.default_namespace().to_string();
        Self {
            api: Api::default_namespaced(client),
            namespace,
        }
    }

    /// Read from the namespace named by `secret_ref`, falling back to the
    /// client's default namespace.
    pub fn for_ref(client: kube::Client, secret_ref: &KubeconfigSecretRef) -> Self {
        match secret_ref.namespace.as_deref() {
            Some(namespace) => Self::new(client, namespace),
            None => Self::default_namespaced(client),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl SecretSource for KubeSecretSource {
    type Error = kube::Error;

    async fn get(&self, name: &str) -> Result<SecretData, Self::Error> {
        debug!("Fetching secret {}/{}", self.namespace, name);
        let secret = self.api.get(name).await?;
        Ok(secret_data(secret))
    }
}

/// Flatten a Secret's `data` field into raw bytes.
///
/// `stringData` is write-only on the API server and never appears in reads.
fn secret_data(secret: Secret) -> SecretData {
    secret
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.0))
        .collect()
}
