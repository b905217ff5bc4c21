//! Compilation database collaborator.
//!
//! Loads a JSON compilation database (`compile_commands.json`) from a
//! directory and answers per-file or whole-database command queries. Query
//! results hold an `Arc` to the loaded entries, so a `CompileCommands` or a
//! single `CompileCommand` stays valid after the handle that produced it is
//! dropped.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const COMPILE_COMMANDS_FILE: &str = "compile_commands.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationDatabaseErrorKind {
    CannotLoadDatabase,
    InvalidDatabase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationDatabaseError {
    pub kind: CompilationDatabaseErrorKind,
    pub message: String,
}

impl CompilationDatabaseError {
    fn new(kind: CompilationDatabaseErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for CompilationDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CompilationDatabaseError {}

/// One entry as stored on disk. `arguments` wins when both forms appear.
#[derive(Debug, Deserialize)]
struct RawCommand {
    directory: String,
    file: String,
    #[serde(default)]
    arguments: Vec<String>,
    #[serde(default)]
    command: Option<String>,
}

#[derive(Debug)]
struct CommandEntry {
    directory: String,
    filename: String,
    arguments: Vec<String>,
}

#[derive(Debug)]
pub struct CompilationDatabase {
    entries: Arc<Vec<CommandEntry>>,
}

impl CompilationDatabase {
    /// Loads `compile_commands.json` from `directory`.
    pub fn from_directory(directory: &Path) -> Result<Self, CompilationDatabaseError> {
        let path = directory.join(COMPILE_COMMANDS_FILE);
        let text = fs::read_to_string(&path).map_err(|err| {
            CompilationDatabaseError::new(
                CompilationDatabaseErrorKind::CannotLoadDatabase,
                format!("cannot load database from {:?}: {}", directory, err),
            )
        })?;
        let raw: Vec<RawCommand> = serde_json::from_str(&text).map_err(|err| {
            CompilationDatabaseError::new(
                CompilationDatabaseErrorKind::InvalidDatabase,
                format!("malformed database at {:?}: {}", path, err),
            )
        })?;

        let entries = raw
            .into_iter()
            .map(|entry| {
                let arguments = if entry.arguments.is_empty() {
                    entry
                        .command
                        .as_deref()
                        .unwrap_or("")
                        .split_whitespace()
                        .map(|arg| arg.to_string())
                        .collect()
                } else {
                    entry.arguments
                };
                CommandEntry {
                    directory: entry.directory,
                    filename: entry.file,
                    arguments,
                }
            })
            .collect();

        Ok(Self {
            entries: Arc::new(entries),
        })
    }

    /// Commands for one source file, in database order.
    pub fn get_compile_commands(&self, file: &str) -> CompileCommands {
        let indices = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.filename == file)
            .map(|(index, _)| index)
            .collect();
        CompileCommands {
            entries: Arc::clone(&self.entries),
            indices,
        }
    }

    pub fn get_all_compile_commands(&self) -> CompileCommands {
        CompileCommands {
            entries: Arc::clone(&self.entries),
            indices: (0..self.entries.len()).collect(),
        }
    }
}

/// Result of a database query. Keeps the loaded entries alive, so it may
/// outlive the `CompilationDatabase` that produced it.
pub struct CompileCommands {
    entries: Arc<Vec<CommandEntry>>,
    indices: Vec<usize>,
}

impl CompileCommands {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CompileCommand> {
        self.indices.get(index).map(|&entry_index| CompileCommand {
            entries: Arc::clone(&self.entries),
            index: entry_index,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = CompileCommand> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

/// One compile command. Keeps the producer chain alive transitively.
pub struct CompileCommand {
    entries: Arc<Vec<CommandEntry>>,
    index: usize,
}

impl CompileCommand {
    pub fn directory(&self) -> &str {
        &self.entries[self.index].directory
    }

    pub fn filename(&self) -> &str {
        &self.entries[self.index].filename
    }

    pub fn arguments(&self) -> &[String] {
        &self.entries[self.index].arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn inputs_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/inputs")
    }

    fn cdb_dir() -> PathBuf {
        inputs_dir().join("cdb")
    }

    #[test]
    fn loading_a_directory_without_a_database_fails() {
        let err = CompilationDatabase::from_directory(&inputs_dir()).unwrap_err();
        assert_eq!(err.kind, CompilationDatabaseErrorKind::CannotLoadDatabase);
    }

    #[test]
    fn loads_a_database() {
        assert!(CompilationDatabase::from_directory(&cdb_dir()).is_ok());
    }

    #[test]
    fn lookup_returns_results_for_a_known_file() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_compile_commands("/home/build/MyProject/project.cpp");
        assert!(!cmds.is_empty());
    }

    #[test]
    fn all_commands_come_back_in_database_order() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_all_compile_commands();
        assert_eq!(cmds.len(), 3);

        let expected_dirs = [
            "/home/build/MyProject",
            "/home/build/MyProjectA",
            "/home/build/MyProjectB",
        ];
        for (index, expected) in expected_dirs.iter().enumerate() {
            assert_eq!(cmds.get(index).unwrap().directory(), *expected);
        }
        assert_eq!(
            cmds.get(2).unwrap().arguments(),
            &[
                "clang++",
                "--driver-mode=g++",
                "-DFEATURE=1",
                "-o",
                "project2-feature.o",
                "-c",
                "/home/build/MyProject/project2.cpp",
            ]
        );
    }

    #[test]
    fn file_with_a_single_command() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_compile_commands("/home/build/MyProject/project.cpp");
        assert_eq!(cmds.len(), 1);
        let cmd = cmds.get(0).unwrap();
        assert_eq!(cmd.directory(), "/home/build/MyProject");
        assert_eq!(cmd.filename(), "/home/build/MyProject/project.cpp");
        assert_eq!(cmd.arguments()[0], "clang++");
    }

    #[test]
    fn file_with_two_commands() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_compile_commands("/home/build/MyProject/project2.cpp");
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds.get(0).unwrap().directory(), "/home/build/MyProjectA");
        assert_eq!(cmds.get(1).unwrap().directory(), "/home/build/MyProjectB");
    }

    #[test]
    fn iterator_stops_after_the_matching_commands() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_compile_commands("/home/build/MyProject/project2.cpp");
        assert_eq!(cmds.iter().count(), 2);
    }

    #[test]
    fn commands_outlive_the_database() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_compile_commands("/home/build/MyProject/project.cpp");
        drop(cdb);
        assert_eq!(cmds.get(0).unwrap().directory(), "/home/build/MyProject");
    }

    #[test]
    fn a_command_outlives_the_command_set() {
        let cdb = CompilationDatabase::from_directory(&cdb_dir()).unwrap();
        let cmds = cdb.get_compile_commands("/home/build/MyProject/project.cpp");
        drop(cdb);
        let cmd = cmds.get(0).unwrap();
        drop(cmds);
        assert_eq!(cmd.directory(), "/home/build/MyProject");
    }
}
