//! Physical identifier generation for resources created without a name
//!
//! Names look like `{stack}-{logical-id}-{suffix}`. The suffix is derived
//! from the client request token, so a host retry of the same request
//! regenerates the same name.

use crate::request::ResourceHandlerRequest;
use sha2::{Digest, Sha256};

/// Length of the generated suffix
pub const SUFFIX_LENGTH: usize = 12;

const DELIMITER: char = '-';
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate `{prefix}-{suffix}` no longer than `max_length` characters.
///
/// The prefix is truncated to leave room for the delimiter and suffix. If
/// nothing of the prefix survives, the suffix is returned alone.
pub fn generate_resource_identifier(prefix: &str, client_request_token: &str, max_length: usize) -> String {
    let suffix = token_suffix(client_request_token);
    let max_prefix_chars = max_length.saturating_sub(SUFFIX_LENGTH + DELIMITER.len_utf8());
    let prefix: String = prefix.chars().take(max_prefix_chars).collect();

    if prefix.is_empty() {
        suffix
    } else {
        format!("{}{}{}", prefix, DELIMITER, suffix)
    }
}

/// Generate a name for the resource in `request`.
///
/// Prefix is `{stack-name}-{logical-id}` when the stack name system tag is
/// present, otherwise `{logical-id}`; `default_logical_id` stands in when the
/// host sent no logical id. A missing client request token falls back to a
/// random one.
pub fn generate_for_request<M>(
    request: &ResourceHandlerRequest<M>,
    default_logical_id: &str,
    max_length: usize,
) -> String {
    let logical_id = request
        .logical_resource_identifier
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(default_logical_id);

    let prefix = match request.stack_name() {
        Some(stack) => format!("{}{}{}", stack, DELIMITER, logical_id),
        None => logical_id.to_string(),
    };

    let token = match request.client_request_token.as_deref() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => {
            tracing::debug!("No client request token, seeding name suffix randomly");
            uuid::Uuid::new_v4().to_string()
        }
    };

    generate_resource_identifier(&prefix, &token, max_length)
}

fn token_suffix(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest
        .iter()
        .take(SUFFIX_LENGTH)
        .map(|b| ALPHANUMERIC[*b as usize % ALPHANUMERIC.len()] as char)
        .collect()
}
