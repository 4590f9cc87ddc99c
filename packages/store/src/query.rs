//! Free-text filtering over the user collection.

use crate::models::User;

/// True when the user's name or email contains `query`, ignoring case.
pub fn matches(user: &User, query: &str) -> bool {
    let q = query.to_lowercase();
    user.name.to_lowercase().contains(&q) || user.email.to_lowercase().contains(&q)
}

/// The ordered subsequence of `users` matching `query`.
///
/// The empty query matches everything. Source order is preserved, and the
/// result is recomputed from scratch on every call; the collection is tens
/// of records, so no caching is warranted.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    users.iter().filter(|u| matches(u, query)).cloned().collect()
}
