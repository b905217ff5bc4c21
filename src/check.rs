//! Consistency checking between the declared and registered mirrors.
//!
//! Builds the declared mapping (extraction + name transform), resolves
//! value-by-reference aliases in one hop, and compares the result against
//! the mapping the binding layer registered, as sets of (name, value)
//! pairs. A mismatch reports every gap at once, never just the first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ast::AstNode;
use crate::binding::KnownMapping;
use crate::extract::{extract_enumerators, EnumeratorRecord, RawValue};
use crate::naming::transform;

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTIC CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const MIR_MISSING_SEPARATOR: &str = "MIR001";
pub const MIR_ENUM_NOT_FOUND: &str = "MIR002";
pub const MIR_FRONTEND_FAILED: &str = "MIR003";
pub const MIR_MIRROR_DRIFT: &str = "MIR004";

fn get_guarantee(code: &str) -> &'static str {
    match code {
        MIR_MISSING_SEPARATOR => {
            "Every native enumerator name carries a namespace prefix separator."
        }
        MIR_ENUM_NOT_FOUND => {
            "The target enumeration is locatable in the parsed translation unit."
        }
        MIR_FRONTEND_FAILED => {
            "The front end hands back a root node for the synthesized translation unit."
        }
        MIR_MIRROR_DRIFT => {
            "Declared and registered mirror mappings are set-equal after alias resolution."
        }
        _ => "Unknown invariant.",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SYNC ERROR
// ═══════════════════════════════════════════════════════════════════════════════

/// Fatal verification error: a structural precondition failed, so no
/// meaningful comparison is possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncError {
    pub code: String,
    pub message: String,
    pub guarantee: String,
}

impl SyncError {
    pub fn new(code: &str, message: &str) -> Self {
        SyncError {
            code: code.to_string(),
            message: message.to_string(),
            guarantee: get_guarantee(code).to_string(),
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for SyncError {}

// ═══════════════════════════════════════════════════════════════════════════════
// DECLARED MAPPING
// ═══════════════════════════════════════════════════════════════════════════════

/// Value under a transformed name: resolved integer, or transiently the
/// transformed name of another enumerator awaiting one substitution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclaredValue {
    Literal(i64),
    Alias(String),
}

pub type DeclaredMapping = BTreeMap<String, DeclaredValue>;

/// Derives the declared mapping from the enumeration node: extract each
/// enumerator, transform its name (and the target name of an alias).
/// Records with no recoverable initializer come back separately so the
/// caller can warn instead of losing them invisibly.
pub fn build_declared_mapping(
    enum_node: &AstNode,
) -> Result<(DeclaredMapping, Vec<EnumeratorRecord>), SyncError> {
    let mut declared = DeclaredMapping::new();
    let mut skipped = Vec::new();
    for record in extract_enumerators(enum_node) {
        match &record.value {
            RawValue::Literal(value) => {
                let name = transform(&record.native_name)?;
                declared.insert(name, DeclaredValue::Literal(*value));
            }
            RawValue::Alias(target) => {
                let name = transform(&record.native_name)?;
                let target = transform(target)?;
                declared.insert(name, DeclaredValue::Alias(target));
            }
            RawValue::Unsupported => skipped.push(record),
        }
    }
    Ok((declared, skipped))
}

// ═══════════════════════════════════════════════════════════════════════════════
// ALIAS RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AliasFailureReason {
    /// The referenced name is absent from the declared mapping.
    MissingTarget,
    /// The referenced name is itself an alias; only one hop is resolved.
    ChainedAlias,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasFailure {
    pub name: String,
    pub target: String,
    pub reason: AliasFailureReason,
}

/// One substitution step: each alias takes the integer stored under its
/// referenced (transformed) name. Failures are collected, not fatal; the
/// run completes and reports them together.
pub fn resolve_aliases(declared: &DeclaredMapping) -> (BTreeMap<String, i64>, Vec<AliasFailure>) {
    let mut resolved = BTreeMap::new();
    let mut failures = Vec::new();
    for (name, value) in declared {
        match value {
            DeclaredValue::Literal(v) => {
                resolved.insert(name.clone(), *v);
            }
            DeclaredValue::Alias(target) => match declared.get(target) {
                Some(DeclaredValue::Literal(v)) => {
                    resolved.insert(name.clone(), *v);
                }
                Some(DeclaredValue::Alias(_)) => failures.push(AliasFailure {
                    name: name.clone(),
                    target: target.clone(),
                    reason: AliasFailureReason::ChainedAlias,
                }),
                None => failures.push(AliasFailure {
                    name: name.clone(),
                    target: target.clone(),
                    reason: AliasFailureReason::MissingTarget,
                }),
            },
        }
    }
    (resolved, failures)
}

// ═══════════════════════════════════════════════════════════════════════════════
// THREE-WAY DIFF
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorEntry {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueConflict {
    pub name: String,
    pub declared: i64,
    pub known: i64,
}

/// Complete gap between the two mirrors: names unique to each side plus
/// names present on both sides with conflicting values, and any alias
/// resolution failures encountered on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorDiff {
    pub only_declared: Vec<MirrorEntry>,
    pub only_known: Vec<MirrorEntry>,
    pub value_conflicts: Vec<ValueConflict>,
    pub alias_failures: Vec<AliasFailure>,
}

impl MirrorDiff {
    pub fn is_empty(&self) -> bool {
        self.only_declared.is_empty()
            && self.only_known.is_empty()
            && self.value_conflicts.is_empty()
            && self.alias_failures.is_empty()
    }
}

impl fmt::Display for MirrorDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] mirror drift detected", MIR_MIRROR_DRIFT)?;
        if !self.only_declared.is_empty() {
            writeln!(f, "  declared in the header but not registered:")?;
            for entry in &self.only_declared {
                writeln!(f, "    {} = {}", entry.name, entry.value)?;
            }
        }
        if !self.only_known.is_empty() {
            writeln!(f, "  registered but not declared in the header:")?;
            for entry in &self.only_known {
                writeln!(f, "    {} = {}", entry.name, entry.value)?;
            }
        }
        if !self.value_conflicts.is_empty() {
            writeln!(f, "  value conflicts:")?;
            for conflict in &self.value_conflicts {
                writeln!(
                    f,
                    "    {}: declared {}, registered {}",
                    conflict.name, conflict.declared, conflict.known
                )?;
            }
        }
        if !self.alias_failures.is_empty() {
            writeln!(f, "  unresolved aliases:")?;
            for failure in &self.alias_failures {
                let reason = match failure.reason {
                    AliasFailureReason::MissingTarget => "missing target",
                    AliasFailureReason::ChainedAlias => "chained alias",
                };
                writeln!(f, "    {} -> {} ({})", failure.name, failure.target, reason)?;
            }
        }
        Ok(())
    }
}

/// Set-equality check over (name, value) pairs. Equality is success; any
/// disagreement comes back as the full three-way diff.
pub fn check(
    declared: &BTreeMap<String, i64>,
    known: &KnownMapping,
    alias_failures: Vec<AliasFailure>,
) -> Result<(), MirrorDiff> {
    let mut diff = MirrorDiff {
        alias_failures,
        ..MirrorDiff::default()
    };
    for (name, value) in declared {
        match known.get(name) {
            None => diff.only_declared.push(MirrorEntry {
                name: name.clone(),
                value: *value,
            }),
            Some(known_value) if known_value != value => diff.value_conflicts.push(ValueConflict {
                name: name.clone(),
                declared: *value,
                known: *known_value,
            }),
            Some(_) => {}
        }
    }
    for (name, value) in known {
        if !declared.contains_key(name) {
            diff.only_known.push(MirrorEntry {
                name: name.clone(),
                value: *value,
            });
        }
    }
    if diff.is_empty() {
        Ok(())
    } else {
        Err(diff)
    }
}
