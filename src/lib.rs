//! # Mirror Sync Ground Truth
//!
//! Verifies that the managed mirror of a native compiler enumeration is
//! bit-for-bit identical to the enumeration declared in the native header.
//! The expected mirror is re-derived from the header's AST and cross-checked
//! against the pairs the binding layer actually registered.
//!
//! ## Verification Invariants
//!
//! 1. **Separator**: every native enumerator name carries a `_` namespace
//!    prefix separator. A name without one aborts the run (MIR001).
//!
//! 2. **Traversal**: the enumeration node is located by exact spelling in
//!    preorder, root included, first match wins.
//!
//! 3. **Exceptions First**: the naming exception table always takes
//!    precedence over the algorithmic transform. First match wins and
//!    duplicate keys are rejected when the table is built.
//!
//! 4. **One-Hop Aliases**: an enumerator defined by reference to another
//!    enumerator resolves through exactly one substitution step. Missing or
//!    chained targets are reported in the diff, never patched up.
//!
//! 5. **Complete Diffs**: a mismatch surfaces every gap in a single run:
//!    declared-only names, registered-only names, and value conflicts.
//!
//! 6. **Fresh Runs**: every run rebuilds its mappings from the AST and the
//!    binding layer. No state crosses runs; the AST stays externally owned
//!    and is never mutated.

mod ast;
mod binding;
mod cdb;
mod check;
mod extract;
mod frontend;
mod naming;
mod verify;

#[cfg(test)]
mod naming_tests;

pub use ast::{find_by_spelling, walk_preorder, AstKind, AstNode, Preorder};
pub use binding::{
    known_mapping_from, library_search_path, KnownMapping, MirrorBinding, LIBRARY_PATH_ENV,
};
pub use cdb::{
    CompilationDatabase, CompilationDatabaseError, CompilationDatabaseErrorKind, CompileCommand,
    CompileCommands,
};
pub use check::{
    build_declared_mapping, check, resolve_aliases, AliasFailure, AliasFailureReason,
    DeclaredMapping, DeclaredValue, MirrorDiff, MirrorEntry, SyncError, ValueConflict,
    MIR_ENUM_NOT_FOUND, MIR_FRONTEND_FAILED, MIR_MIRROR_DRIFT, MIR_MISSING_SEPARATOR,
};
pub use extract::{extract_enumerators, EnumeratorRecord, RawValue};
pub use frontend::{locate_header, synthesize_translation_unit, Frontend, SYNTHETIC_FILE_NAME};
pub use naming::transform;
pub use verify::{
    verify_enum_mirror, VerifyError, VerifyOptions, VerifyReport, DEFAULT_ENUM_TYPE,
    DEFAULT_HEADER,
};
