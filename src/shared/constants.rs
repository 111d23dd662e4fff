// =============================================================================
// ENVELOPE MESSAGES
// =============================================================================

/// Returned for any path that does not map to a route
pub const MSG_INVALID_ROUTE: &str = "Accessing an invalid/non-existing route.";

/// Returned after a successful update
pub const MSG_RECORD_UPDATED: &str = "Address record updated.";

/// Returned after a successful delete
pub const MSG_RECORD_DELETED: &str = "Address record deleted.";
