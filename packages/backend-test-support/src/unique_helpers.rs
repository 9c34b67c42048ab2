//! Test helpers for generating unique test data
//!
//! Integration tests share one process, so player names get a random suffix
//! to keep tests isolated from each other.

use uuid::Uuid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Generate a unique player name that fits the 64 character limit.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_player_name;
///
/// let name = unique_player_name("alice");
/// assert!(name.starts_with("alice-"));
/// assert!(name.chars().count() <= 64);
/// ```
pub fn unique_player_name(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &suffix[..12])
}
