//! Opaque API token keys.

use uuid::Uuid;

/// Length in characters of a generated token key.
pub const KEY_LEN: usize = 32;

/// Generate a new opaque token key: 32 lowercase hex characters.
///
/// Keys carry no structure or claims; they are only meaningful as lookup
/// keys in the token store.
pub fn generate_key() -> String {
    Uuid::new_v4().simple().to_string()
}
