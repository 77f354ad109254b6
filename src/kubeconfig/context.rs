//! Context selection within a parsed kubeconfig.

use kube::config::Kubeconfig;
use tracing::debug;

use crate::error::{ResolveError, Result};

/// Which context of a kubeconfig document to activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSelection<'a> {
    /// The document's declared `current-context`.
    Current,
    Named(&'a str),
}

impl<'a> ContextSelection<'a> {
    /// An empty name selects the current context.
    pub const fn from_name(name: &'a str) -> Self {
        if name.is_empty() {
            Self::Current
        } else {
            Self::Named(name)
        }
    }

    /// Resolve to the name of a context that exists in `kubeconfig`.
    pub fn resolve(self, kubeconfig: &Kubeconfig) -> Result<String> {
        let name = match self {
            Self::Named(name) => name,
            Self::Current => kubeconfig
                .current_context
                .as_deref()
                .filter(|name| !name.is_empty())
                .ok_or(ResolveError::CurrentContextNotSet)?,
        };

        if !kubeconfig.contexts.iter().any(|ctx| ctx.name == name) {
            return Err(ResolveError::ContextNotFound(name.to_string()));
        }

        debug!("Selected kubeconfig context {}", name);
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kubeconfig(current: Option<&str>, contexts: &[&str]) -> Kubeconfig {
        let mut yaml = String::from("apiVersion: v1\nkind: Config\ncontexts:\n");
        for name in contexts {
            yaml.push_str(&format!("- name: {name}\n  context:\n    cluster: c\n    user: u\n"));
        }
        if let Some(current) = current {
            yaml.push_str(&format!("current-context: {current}\n"));
        }
        Kubeconfig::from_yaml(&yaml).unwrap()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ContextSelection::from_name(""), ContextSelection::Current);
        assert_eq!(
            ContextSelection::from_name("prod"),
            ContextSelection::Named("prod")
        );
    }

    #[test]
    fn test_resolve_current() {
        let kc = kubeconfig(Some("prod"), &["dev", "prod"]);
        assert_eq!(ContextSelection::Current.resolve(&kc).unwrap(), "prod");
    }

    #[test]
    fn test_resolve_named_non_current() {
        let kc = kubeconfig(Some("prod"), &["dev", "prod"]);
        assert_eq!(ContextSelection::Named("dev").resolve(&kc).unwrap(), "dev");
    }

    #[test]
    fn test_resolve_named_missing() {
        let kc = kubeconfig(Some("prod"), &["dev", "prod"]);
        let err = ContextSelection::Named("staging").resolve(&kc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContextNotFound);
        assert_eq!(err.to_string(), "Context not found in kubeconfig: staging");
    }

    #[test]
    fn test_resolve_current_not_set() {
        let kc = kubeconfig(None, &["dev"]);
        let err = ContextSelection::Current.resolve(&kc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CurrentContextNotSet);
    }

    #[test]
    fn test_resolve_named_without_current() {
        let kc = kubeconfig(None, &["dev"]);
        assert_eq!(ContextSelection::Named("dev").resolve(&kc).unwrap(), "dev");
    }

    #[test]
    fn test_resolve_dangling_current_context() {
        let kc = kubeconfig(Some("gone"), &["dev"]);
        let err = ContextSelection::Current.resolve(&kc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContextNotFound);
        assert!(err.to_string().contains("gone"));
    }
}
