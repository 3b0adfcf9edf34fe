//! Common error messages used across enumreg components.
//!
//! These constants keep wording consistent between the builder and the registry.

/// Detail: a member value collides with another member of the same type.
pub const DETAIL_OWN_VALUE: &str = "both declared in this type";

/// Detail: a member value collides with one inherited from a base type.
pub const DETAIL_INHERITED_VALUE: &str = "inherited from a base type";

/// Detail: two base types contribute different members with the same value.
pub const DETAIL_BASES_CONFLICT: &str = "inherited from different base types";

/// Reason: separators would make `Type.member` and name lists ambiguous.
pub const REASON_SEPARATOR: &str = "must not contain whitespace or '.'";

/// Reason: empty names cannot be looked up.
pub const REASON_EMPTY: &str = "must not be empty";

/// Reason: persisted member keys take the form `Type.member`.
pub const REASON_MEMBER_KEY: &str = "expected a key of the form Type.member";
