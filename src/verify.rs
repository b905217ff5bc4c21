//! Batch verification entry point.
//!
//! One run: synthesize the translation unit, parse it through the front
//! end, locate the enumeration, derive the declared mapping, resolve
//! aliases, and cross-check against the binding layer's registered mirror.
//! Each run is independent and side-effect-free apart from its report.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::ast::find_by_spelling;
use crate::binding::{known_mapping_from, MirrorBinding};
use crate::check::{
    build_declared_mapping, check, resolve_aliases, MirrorDiff, SyncError, MIR_ENUM_NOT_FOUND,
};
use crate::frontend::{synthesize_translation_unit, Frontend, SYNTHETIC_FILE_NAME};

/// Well-known header exposing the target enumeration.
pub const DEFAULT_HEADER: &str = "clang-c/Index.h";
/// Well-known type name of the target enumeration.
pub const DEFAULT_ENUM_TYPE: &str = "CXCursorKind";

#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub header: String,
    pub enum_type: String,
    pub include_dirs: Vec<PathBuf>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            enum_type: DEFAULT_ENUM_TYPE.to_string(),
            include_dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyReport {
    pub enum_type: String,
    pub header: String,
    /// Entries cross-checked after alias resolution.
    pub checked: usize,
    /// Native names excluded because their initializer form is not
    /// statically recoverable.
    pub skipped: Vec<String>,
}

impl VerifyReport {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug)]
pub enum VerifyError {
    /// Structural precondition failed before any comparison was possible.
    Fatal(SyncError),
    /// The comparison ran and the mirrors disagree.
    Drift(MirrorDiff),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Fatal(err) => write!(f, "{}", err),
            VerifyError::Drift(diff) => write!(f, "{}", diff),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Verifies that the mirror registered by `binding` matches the enumeration
/// `options.enum_type` declared by `options.header`.
pub fn verify_enum_mirror(
    frontend: &dyn Frontend,
    binding: &dyn MirrorBinding,
    options: &VerifyOptions,
) -> Result<VerifyReport, VerifyError> {
    let source = synthesize_translation_unit(&options.header);
    let root = frontend
        .parse_translation_unit(SYNTHETIC_FILE_NAME, &source, &options.include_dirs)
        .map_err(VerifyError::Fatal)?;

    let enum_node = find_by_spelling(&root, &options.enum_type).ok_or_else(|| {
        VerifyError::Fatal(SyncError::new(
            MIR_ENUM_NOT_FOUND,
            &format!(
                "enumeration '{}' not found in '{}'",
                options.enum_type, options.header
            ),
        ))
    })?;

    let (declared, skipped_records) = build_declared_mapping(enum_node).map_err(VerifyError::Fatal)?;
    let skipped: Vec<String> = skipped_records
        .into_iter()
        .map(|record| record.native_name)
        .collect();
    for name in &skipped {
        eprintln!(
            "[MirrorSync] skipping enumerator '{}': initializer is not statically recoverable",
            name
        );
    }

    let (resolved, alias_failures) = resolve_aliases(&declared);
    let known = known_mapping_from(binding);
    check(&resolved, &known, alias_failures).map_err(VerifyError::Drift)?;

    Ok(VerifyReport {
        enum_type: options.enum_type.clone(),
        header: options.header.clone(),
        checked: resolved.len(),
        skipped,
    })
}
