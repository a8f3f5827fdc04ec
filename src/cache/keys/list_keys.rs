/// Owner scope prefix
const OWNER_PREFIX: &str = "owner:";

/// Key for the aggregate of all lists an owner can see.
pub fn owner_lists_key(owner_id: i32) -> String {
    format!("{}{}:lists", OWNER_PREFIX, owner_id)
}

/// Key for a single list, nested under the owner's list scope.
pub fn owner_list_key(owner_id: i32, list_id: i32) -> String {
    format!("{}{}:lists:{}", OWNER_PREFIX, owner_id, list_id)
}

/// Pattern clearing the aggregate and every nested entry in one pass.
pub fn owner_scope_pattern(owner_id: i32) -> String {
    format!("{}{}:lists*", OWNER_PREFIX, owner_id)
}
