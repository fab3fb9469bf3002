use crate::uri::UUri;
use xxhash_rust::xxh3::xxh3_64;

/// Hashes the canonical long form of `uri` into the `u64` used as the
/// transport-level correlation key.
///
/// The key depends only on the resource, never on the call, so every query
/// addressed to the same resource shares one subject.
#[inline]
pub fn subject_hash(uri: &UUri) -> u64 {
    xxh3_64(uri.to_long_uri().as_bytes())
}

/// The transport subject for `uri`: its [`subject_hash`] rendered in decimal.
pub fn subject_for(uri: &UUri) -> String {
    subject_hash(uri).to_string()
}
