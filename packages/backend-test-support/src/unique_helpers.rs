//! Unique fixture names so tests never collide on the `users.name` unique index.

use uuid::Uuid;

/// `{prefix}-{8 hex chars}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let a = unique_name("player");
/// let b = unique_name("player");
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

/// Unique contact address under the reserved `example.test` domain.
pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.test", unique_name(prefix))
}
