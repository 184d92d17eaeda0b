use chrono::Local;
use sha1::{Digest, Sha1};

fn sha1_hex(input: &str) -> String {
    format!("{:x}", Sha1::digest(input.as_bytes()))
}

/// Computes the WAPI authorization string for the given hour.
///
/// The hour must be the two-digit, zero-padded form (`"00"` to `"23"`). The
/// provider only accepts the digest during that hour of its own clock.
pub(crate) fn digest_for_hour(user: &str, key: &str, hour: &str) -> String {
    sha1_hex(&format!("{user}{}{hour}", sha1_hex(key)))
}

/// Computes the WAPI authorization string for the current local hour.
pub(crate) fn digest(user: &str, key: &str) -> String {
    digest_for_hour(user, key, &Local::now().format("%H").to_string())
}
