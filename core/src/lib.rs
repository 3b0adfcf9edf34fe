//! Enumreg Core Types
//!
//! This crate provides the foundational types shared by the enumreg crates:
//! - Arena identifiers (EnumTypeId, MemberId)
//! - The unified lookup key (LookupKey)
//! - Ordering operators that members refuse (CompareOp)
//! - Common error types

mod error;
mod id;
mod key;
pub mod messages;

pub use error::*;
pub use id::*;
pub use key::*;
