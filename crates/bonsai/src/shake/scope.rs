use std::collections::HashMap;

use swc_core::ecma::ast::Id;

use crate::shake::declaration::{DeclId, DeclKind};

/// One binding occurrence of a name, described by the nearest enclosing
/// construct of each origin kind. A parameter inside `const x = (a) => a`
/// has `var_declarator` pointing at `x`'s declarator; the name of a nested
/// `function g` has `fn_decl` pointing at `g` itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingNode {
    pub import: Option<DeclId>,
    pub var_declarator: Option<DeclId>,
    pub fn_decl: Option<DeclId>,
    pub default_import: Option<DeclId>,
}

impl BindingNode {
    pub fn of_kind(&self, kind: DeclKind) -> Option<DeclId> {
        match kind {
            DeclKind::ImportNamed => self.import,
            DeclKind::Var => self.var_declarator,
            DeclKind::Fn => self.fn_decl,
            DeclKind::ImportDefault => self.default_import,
        }
    }
}

/// The scope-lookup oracle. Production code answers from an index built off
/// the resolver-annotated tree; tests may answer from a hand-built table.
pub trait ScopeResolver {
    /// All binding occurrences visible for `id`, or `None` when the name has
    /// no declaration at all (a free identifier).
    fn bindings_of(&self, id: &Id) -> Option<&[BindingNode]>;
}

#[derive(Debug, Default)]
pub struct AstScopeIndex {
    bindings: HashMap<Id, Vec<BindingNode>>,
}

impl AstScopeIndex {
    pub fn add(&mut self, id: Id, node: BindingNode) {
        self.bindings.entry(id).or_default().push(node);
    }
}

impl ScopeResolver for AstScopeIndex {
    fn bindings_of(&self, id: &Id) -> Option<&[BindingNode]> {
        self.bindings.get(id).map(Vec::as_slice)
    }
}
