//! Custom error types for ksr.

use thiserror::Error;

/// Boxed error returned by a [`SecretSource`](crate::secret::SecretSource) backend.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// Errors that can occur while resolving a client configuration from a secret.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to fetch secret '{name}': {source}")]
    SecretFetch {
        name: String,
        #[source]
        source: SourceError,
    },

    #[error("Secret has no '{key}' key")]
    MissingKubeconfigKey { key: String },

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigParse(String),

    #[error("Context not found in kubeconfig: {0}")]
    ContextNotFound(String),

    #[error("Kubeconfig declares no current-context and none was requested")]
    CurrentContextNotSet,

    #[error("Failed to build client configuration for context '{context}': {source}")]
    ClientConfig {
        context: String,
        #[source]
        source: kube::config::KubeconfigError,
    },

    #[error("Failed to build Kubernetes client: {0}")]
    ClientBuild(#[source] kube::Error),
}

/// Fieldless view of [`ResolveError`] for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SecretFetch,
    MissingKubeconfigKey,
    KubeconfigParse,
    ContextNotFound,
    CurrentContextNotSet,
    ClientConfig,
    ClientBuild,
}

impl ResolveError {
    /// Wrap a secret backend error with the name of the secret being fetched.
    pub fn secret_fetch<E>(name: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SecretFetch {
            name: name.to_string(),
            source: Box::new(err),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SecretFetch { .. } => ErrorKind::SecretFetch,
            Self::MissingKubeconfigKey { .. } => ErrorKind::MissingKubeconfigKey,
            Self::KubeconfigParse(_) => ErrorKind::KubeconfigParse,
            Self::ContextNotFound(_) => ErrorKind::ContextNotFound,
            Self::CurrentContextNotSet => ErrorKind::CurrentContextNotSet,
            Self::ClientConfig { .. } => ErrorKind::ClientConfig,
            Self::ClientBuild(_) => ErrorKind::ClientBuild,
        }
    }

    /// Returns true if retrying the same call might succeed.
    ///
    /// Only failures that depend on something outside the kubeconfig document
    /// qualify; a bad document stays bad until someone rewrites the secret.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::SecretFetch { .. } | Self::ClientBuild(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("connection refused")]
    struct Refused;

    #[test]
    fn test_error_display_secret_fetch() {
        let err = ResolveError::secret_fetch("cluster-kubeconfig", Refused);
        assert_eq!(
            err.to_string(),
            "Failed to fetch secret 'cluster-kubeconfig': connection refused"
        );
    }

    #[test]
    fn test_secret_fetch_keeps_source() {
        let err = ResolveError::secret_fetch("cluster-kubeconfig", Refused);
        let source = err.source().expect("source should be preserved");
        assert!(source.downcast_ref::<Refused>().is_some());
    }

    #[test]
    fn test_error_display_missing_key() {
        let err = ResolveError::MissingKubeconfigKey {
            key: "kubeconfig".to_string(),
        };
        assert_eq!(err.to_string(), "Secret has no 'kubeconfig' key");
    }

    #[test]
    fn test_error_display_context_not_found() {
        let err = ResolveError::ContextNotFound("staging".to_string());
        assert_eq!(err.to_string(), "Context not found in kubeconfig: staging");
    }

    #[test]
    fn test_error_display_parse() {
        let err = ResolveError::KubeconfigParse("payload is empty".to_string());
        assert_eq!(err.to_string(), "Failed to parse kubeconfig: payload is empty");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            ResolveError::secret_fetch("x", Refused).kind(),
            ErrorKind::SecretFetch
        );
        assert_eq!(
            ResolveError::ContextNotFound("x".into()).kind(),
            ErrorKind::ContextNotFound
        );
        assert_eq!(
            ResolveError::CurrentContextNotSet.kind(),
            ErrorKind::CurrentContextNotSet
        );
    }

    #[test]
    fn test_is_transient() {
        assert!(ResolveError::secret_fetch("x", Refused).is_transient());
        assert!(!ResolveError::KubeconfigParse("y".into()).is_transient());
        assert!(!ResolveError::MissingKubeconfigKey { key: "z".into() }.is_transient());
        assert!(!ResolveError::ContextNotFound("z".into()).is_transient());
    }
}
