//! Kubeconfig extraction, decoding, and context selection.

pub mod context;
pub mod extract;
pub mod payload;

pub use context::ContextSelection;
pub use extract::KeyExtractor;
pub use payload::parse_kubeconfig;

/// Secret data key holding the kubeconfig document.
pub const KUBECONFIG_KEY: &str = "kubeconfig";
