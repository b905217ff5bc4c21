//! Enumerator extraction.
//!
//! Turns the direct children of an enumeration node into one record each,
//! in declaration order. An enumerator's value is recovered from its first
//! child expression: an integer literal, a reference to another enumerator,
//! or - explicitly - `Unsupported` when the initializer has no statically
//! recoverable form (e.g. implicit increment from the previous enumerator).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ast::{AstKind, AstNode};

lazy_static! {
    /// Token shapes the front end hands back for integer literals.
    static ref INT_LITERAL_RE: Regex = Regex::new(r"^(?:0[xX][0-9a-fA-F]+|[0-9]+)$").unwrap();
}

/// Tagged extraction result. `Unsupported` is not an error; callers decide
/// whether to warn, but such records never enter the declared mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RawValue {
    Literal(i64),
    Alias(String),
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumeratorRecord {
    pub native_name: String,
    pub value: RawValue,
}

/// One record per direct child of `enum_node`, in declaration order. The
/// final cross-check compares sets, but a stable order keeps diffs
/// deterministic.
pub fn extract_enumerators(enum_node: &AstNode) -> Vec<EnumeratorRecord> {
    enum_node
        .children
        .iter()
        .map(|child| EnumeratorRecord {
            native_name: child.spelling.clone(),
            value: extract_value(child),
        })
        .collect()
}

fn extract_value(enumerator: &AstNode) -> RawValue {
    let Some(init) = enumerator.children.first() else {
        return RawValue::Unsupported;
    };
    match init.kind {
        AstKind::IntegerLiteral => match init.tokens.first() {
            Some(token) => parse_integer_token(token)
                .map(RawValue::Literal)
                .unwrap_or(RawValue::Unsupported),
            None => RawValue::Unsupported,
        },
        AstKind::DeclRefExpr => match init.tokens.first() {
            Some(token) => RawValue::Alias(token.clone()),
            None => RawValue::Unsupported,
        },
        _ => RawValue::Unsupported,
    }
}

fn parse_integer_token(token: &str) -> Option<i64> {
    if !INT_LITERAL_RE.is_match(token) {
        return None;
    }
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else {
        token.parse::<i64>().ok()
    }
}
