/**
 * Object Identifiers
 *
 * Records are identified by 24-character hex strings: 4 timestamp bytes
 * followed by 8 random bytes. Sorting ids therefore approximates creation
 * order, which the in-memory store relies on for listings.
 *
 * Validation only checks the length. That matches the store's contract and
 * keeps malformed input from reaching the persistence layer and turning
 * into a different, lower-quality error.
 */

/// Length of a valid object id
pub const OBJECT_ID_LEN: usize = 24;

/// Check whether a path parameter is syntactically a valid object id
///
/// Pure; performs no lookup. Used by the resource loader before any store
/// access.
pub fn is_valid(value: &str) -> bool {
    value.chars().count() == OBJECT_ID_LEN
}

/// Generate a fresh object id
pub fn generate() -> String {
    let seconds = chrono::Utc::now().timestamp() as u32;
    let random = uuid::Uuid::new_v4();

    let mut id = format!("{:08x}", seconds);
    for byte in &random.as_bytes()[..8] {
        id.push_str(&format!("{:02x}", byte));
    }
    id
}
