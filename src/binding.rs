//! Binding-layer boundary.
//!
//! The binding layer loads the native shared library and registers the
//! mirror enumeration; this crate only enumerates what it registered.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Environment variable naming the directory holding the native shared
/// library the binding layer loads. Absent means platform default search.
pub const LIBRARY_PATH_ENV: &str = "CLANG_LIBRARY_PATH";

/// Contract with the binding layer: the (name, value) pairs it already
/// registered for the mirror enumeration. Never re-derived here.
pub trait MirrorBinding {
    fn registered_kinds(&self) -> Vec<(String, i64)>;
}

/// Mirror name -> integer value, immutable from this crate's perspective.
pub type KnownMapping = BTreeMap<String, i64>;

pub fn known_mapping_from(binding: &dyn MirrorBinding) -> KnownMapping {
    binding.registered_kinds().into_iter().collect()
}

pub fn library_search_path() -> Option<PathBuf> {
    std::env::var_os(LIBRARY_PATH_ENV).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticBinding(Vec<(String, i64)>);

    impl MirrorBinding for StaticBinding {
        fn registered_kinds(&self) -> Vec<(String, i64)> {
            self.0.clone()
        }
    }

    #[test]
    fn known_mapping_materializes_the_binding_pairs() {
        let binding = StaticBinding(vec![
            ("B".to_string(), 2),
            ("A".to_string(), 1),
        ]);
        let known = known_mapping_from(&binding);
        let pairs: Vec<(String, i64)> = known.into_iter().collect();
        assert_eq!(pairs, vec![("A".to_string(), 1), ("B".to_string(), 2)]);
    }

    #[test]
    fn library_path_comes_from_the_environment() {
        std::env::set_var(LIBRARY_PATH_ENV, "/opt/native/lib");
        assert_eq!(
            library_search_path(),
            Some(PathBuf::from("/opt/native/lib"))
        );
        std::env::remove_var(LIBRARY_PATH_ENV);
        assert_eq!(library_search_path(), None);
    }
}
