//! Keys for the unified member lookup.
//!
//! A member can be addressed either by its integer value or by its name.
//! `LookupKey` carries either form so a single entry point can accept both
//! `Fruit.get(2)` and `Fruit.get("banana")`.

use std::fmt;

/// Either an integer value or a member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// Integer value of a member.
    Value(i64),
    /// Name of a member.
    Name(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Value(v) => write!(f, "{}", v),
            LookupKey::Name(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for LookupKey {
    fn from(v: i64) -> Self {
        LookupKey::Value(v)
    }
}

impl From<i32> for LookupKey {
    fn from(v: i32) -> Self {
        LookupKey::Value(i64::from(v))
    }
}

impl From<u32> for LookupKey {
    fn from(v: u32) -> Self {
        LookupKey::Value(i64::from(v))
    }
}

impl From<&str> for LookupKey {
    fn from(s: &str) -> Self {
        LookupKey::Name(s.to_string())
    }
}

impl From<String> for LookupKey {
    fn from(s: String) -> Self {
        LookupKey::Name(s)
    }
}

impl From<&String> for LookupKey {
    fn from(s: &String) -> Self {
        LookupKey::Name(s.clone())
    }
}

/// Ordering operators. Members support none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompareOp {
    /// Operator symbol as written in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
