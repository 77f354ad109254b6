//! `KubeconfigSecretRef` configuration type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kubeconfig::KUBECONFIG_KEY;

/// Points at a Secret holding a workload cluster's kubeconfig.
///
/// Meant to be embedded in an orchestrator's own CRD spec, e.g.
///
/// ```yaml
/// kubeconfigSecretRef:
///   name: my-cluster-kubeconfig
///   namespace: clusters
///   context: admin@my-cluster
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KubeconfigSecretRef {
    /// Name of the Secret.
    pub name: String,

    /// Namespace of the Secret. Defaults to the client's namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Data key holding the kubeconfig (default: "kubeconfig"). A blank value
    /// is read as the default.
    #[serde(default = "default_key")]
    pub key: String,

    /// Context to activate. Defaults to the document's current-context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn default_key() -> String {
    KUBECONFIG_KEY.to_string()
}

impl KubeconfigSecretRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            key: default_key(),
            context: None,
        }
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Context name in resolver form: empty means current-context.
    pub fn context_name(&self) -> &str {
        self.context.as_deref().unwrap_or_default()
    }
}
