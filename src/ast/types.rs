//! Type annotations in the AST.
//!
//! The language knows exactly two types, and only function return types are
//! checked against them. Parameter annotations are kept as written.

use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use serde::Serialize;

lazy_static! {
    static ref RETURN_TYPE_LOOKUP: HashMap<&'static str, ReturnType> = {
        let mut map = HashMap::new();
        map.insert("void", ReturnType::Void);
        map.insert("int", ReturnType::Int);
        map
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    Void,
    Int,
}

impl ReturnType {
    pub fn from_name(name: &str) -> Option<Self> {
        RETURN_TYPE_LOOKUP.get(name).copied()
    }
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Void => write!(f, "void"),
            ReturnType::Int => write!(f, "int"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[cfg(test)]
mod tests {
    use super::ReturnType;

    #[test]
    fn test_return_type_lookup() {
        assert_eq!(ReturnType::from_name("void"), Some(ReturnType::Void));
        assert_eq!(ReturnType::from_name("int"), Some(ReturnType::Int));
        assert_eq!(ReturnType::from_name("bool"), None);
        assert_eq!(ReturnType::from_name("Int"), None);
    }
}
