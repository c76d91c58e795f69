//! Content hashing for rendered diagrams.
//!
//! The hash is a cache-validation token: callers compare it to decide whether
//! a response body changed, so it must be a deterministic, collision-resistant
//! digest of the exact output bytes. Secrecy is not a requirement.

/// Computes the blake3 digest of the given bytes as lowercase hex.
///
/// The full 64-character digest is returned; identical input always yields an
/// identical token.
///
/// # Examples
///
/// ```
/// # use capo::content_hash;
/// let token = content_hash(b"<svg/>");
/// assert_eq!(token.len(), 64);
/// assert_eq!(token, content_hash(b"<svg/>"));
/// ```
pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}
