use super::list_keys::owner_list_key;

/// Key for the aggregate of items in one list. Nested under the owner's
/// list scope so the same pattern delete covers it.
pub fn list_items_key(owner_id: i32, list_id: i32) -> String {
    format!("{}:items", owner_list_key(owner_id, list_id))
}
