//! AST snapshot handed over by the front end.
//!
//! The front end owns the real tree; this is the read-only view the
//! verification pipeline consumes: a syntactic kind, a display name
//! ("spelling"), the node's source tokens, and its children in source order.

use serde::{Deserialize, Serialize};

/// The syntactic categories the pipeline consumes. Everything else the
/// front end produces is handed over as `Unexposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AstKind {
    TranslationUnit,
    EnumDecl,
    EnumConstantDecl,
    IntegerLiteral,
    DeclRefExpr,
    Unexposed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstNode {
    pub kind: AstKind,
    /// Display name. Not necessarily unique within a tree.
    pub spelling: String,
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(kind: AstKind, spelling: &str) -> Self {
        Self {
            kind,
            spelling: spelling.to_string(),
            tokens: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Preorder iterator: node before its children, children left to right.
pub fn walk_preorder(root: &AstNode) -> Preorder<'_> {
    Preorder { stack: vec![root] }
}

pub struct Preorder<'a> {
    stack: Vec<&'a AstNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a AstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// First node (preorder, `root` included) whose spelling matches exactly.
/// Works the same whether `root` is a whole translation unit or a sub-node.
pub fn find_by_spelling<'a>(root: &'a AstNode, spelling: &str) -> Option<&'a AstNode> {
    walk_preorder(root).find(|node| node.spelling == spelling)
}
