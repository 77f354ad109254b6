//! Kubernetes client builder for clusters whose kubeconfig lives in a secret.

use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::resolver::resolve_ref;
use crate::secret::{KubeSecretSource, KubeconfigSecretRef};

/// Build a client for the workload cluster described by `secret_ref`.
///
/// The secret is read through `management`, the client of the cluster that
/// stores it.
pub async fn connect(
    management: kube::Client,
    secret_ref: &KubeconfigSecretRef,
) -> Result<kube::Client> {
    let source = KubeSecretSource::for_ref(management, secret_ref);
    let config = resolve_ref(&source, secret_ref).await?;
    debug!(
        "Connecting to {} using secret {}/{}",
        config.cluster_url,
        source.namespace(),
        secret_ref.name
    );
    build_client(config)
}

/// Build a client from an already resolved configuration.
pub fn build_client(config: kube::Config) -> Result<kube::Client> {
    kube::Client::try_from(config).map_err(ResolveError::ClientBuild)
}
