//! Avatar URLs derived from usernames.

use url::form_urlencoded::byte_serialize;

const AVATAR_ENDPOINT: &str = "https://api.dicebear.com/6.x/avataaars/svg";

/// Deterministic avatar image URL for a username. Same seed, same face.
pub fn avatar_url(username: &str) -> String {
    let seed: String = byte_serialize(username.as_bytes()).collect();
    format!("{AVATAR_ENDPOINT}?seed={seed}")
}
