//! ksr - Kubeconfig Secret Resolver.
//!
//! Resolves a `kube::Config` for a workload cluster whose kubeconfig is stored
//! under a well-known key of a Kubernetes Secret:
//!
//! secret fetch -> key extraction -> kubeconfig parsing -> context selection
//! -> client configuration.
//!
//! ```no_run
//! # async fn run(client: kube::Client) -> ksr::Result<()> {
//! let source = ksr::KubeSecretSource::new(client, "clusters");
//! let config = ksr::resolve(&source, "workload-kubeconfig", "").await?;
//! let workload = ksr::build_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod kubeconfig;
pub mod resolver;
pub mod secret;

pub use client::{build_client, connect};
pub use error::{ErrorKind, ResolveError, Result};
pub use kubeconfig::KUBECONFIG_KEY;
pub use resolver::{ConfigResolver, resolve, resolve_ref};
pub use secret::{
    KubeSecretSource, KubeconfigSecretRef, MemorySecretSource, MemorySourceError, SecretData,
    SecretSource,
};
