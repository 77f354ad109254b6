//! Kubeconfig payload decoding and parsing.
//!
//! A payload is either the YAML document itself or the document base64-encoded
//! once more, as written by tooling that encodes before handing the value to
//! the API server (which encodes again on the wire). Raw YAML always contains
//! characters outside the base64 alphabet, so the two cannot be confused.
//! Trailing `=` padding is optional on the encoded form.

use std::borrow::Cow;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use kube::config::Kubeconfig;
use tracing::debug;

use crate::error::{ResolveError, Result};

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode and parse a kubeconfig payload taken from secret data.
pub fn parse_kubeconfig(payload: &[u8]) -> Result<Kubeconfig> {
    let document = decode_payload(payload)?;

    let text = std::str::from_utf8(&document)
        .map_err(|e| ResolveError::KubeconfigParse(format!("payload is not valid UTF-8: {e}")))?;

    let kubeconfig =
        Kubeconfig::from_yaml(text).map_err(|e| ResolveError::KubeconfigParse(e.to_string()))?;

    if kubeconfig.contexts.is_empty() {
        return Err(ResolveError::KubeconfigParse(
            "document defines no contexts".to_string(),
        ));
    }

    debug!(
        "Parsed kubeconfig: {} clusters, {} contexts, {} users",
        kubeconfig.clusters.len(),
        kubeconfig.contexts.len(),
        kubeconfig.auth_infos.len()
    );

    Ok(kubeconfig)
}

fn decode_payload(payload: &[u8]) -> Result<Cow<'_, [u8]>> {
    let trimmed = payload.trim_ascii();
    if trimmed.is_empty() {
        return Err(ResolveError::KubeconfigParse("payload is empty".to_string()));
    }

    if !is_base64_text(trimmed) {
        return Ok(Cow::Borrowed(payload));
    }

    // Encoders commonly wrap at 76 columns.
    let compact: Vec<u8> = trimmed
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let decoded = PAYLOAD_ENGINE.decode(&compact).map_err(|e| {
        ResolveError::KubeconfigParse(format!("payload is not valid base64: {e}"))
    })?;
    if decoded.trim_ascii().is_empty() {
        return Err(ResolveError::KubeconfigParse(
            "decoded payload is empty".to_string(),
        ));
    }

    debug!("Decoded base64 kubeconfig payload ({} bytes)", decoded.len());
    Ok(Cow::Owned(decoded))
}

fn is_base64_text(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| {
        b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=') || b.is_ascii_whitespace()
    })
}
