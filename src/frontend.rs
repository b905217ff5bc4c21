//! Front-end boundary.
//!
//! The native compiler front end is an external collaborator: it owns the
//! real parser and the lifetime of the tree. This crate hands it a
//! synthesized in-memory translation unit and consumes the `AstNode`
//! snapshot it returns.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::ast::AstNode;
use crate::check::SyncError;

/// File name given to the synthesized translation unit.
pub const SYNTHETIC_FILE_NAME: &str = "mirror_check.c";

/// Contract with the front end: parse a translation unit, hand back the
/// root node. Implementations report failures as MIR003.
pub trait Frontend {
    fn parse_translation_unit(
        &self,
        file_name: &str,
        source: &str,
        include_dirs: &[PathBuf],
    ) -> Result<AstNode, SyncError>;
}

/// In-memory stub that pulls in the target header.
pub fn synthesize_translation_unit(header: &str) -> String {
    format!("#include \"{}\"\n", header)
}

/// Finds the include root that exposes `relative` (e.g. "clang-c/Index.h").
/// Each candidate root is checked directly before its subtree is scanned.
pub fn locate_header(roots: &[PathBuf], relative: &str) -> Option<PathBuf> {
    let needle = Path::new(relative);
    for root in roots {
        if root.join(needle).is_file() {
            return Some(root.clone());
        }
        for entry in WalkDir::new(root).follow_links(true) {
            if let Ok(entry) = entry {
                if entry.file_type().is_dir() && entry.path().join(needle).is_file() {
                    return Some(entry.path().to_path_buf());
                }
            }
        }
    }
    None
}
