use std::collections::HashMap;

use swc_core::common::Span;
use swc_core::ecma::atoms::Atom;

use crate::shake::reference_collector::Reference;

/// Stable identity of a declaration site. Arena indices survive tree
/// mutation, unlike raw node handles.
pub type DeclId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    ImportNamed,
    ImportDefault,
    Var,
    Fn,
}

#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Position of the underlying node; used to re-identify it at removal
    /// time.
    pub span: Span,
    /// Declared directly in the module body, as opposed to inside a block,
    /// function, or conditional.
    pub top_level: bool,
    /// Name usable by module-scope lookups; `None` for destructuring
    /// patterns, which declare no single name.
    pub lookup_name: Option<Atom>,
    /// Identifier uses inside this declaration's subtree.
    pub refs: Vec<Reference>,
}

#[derive(Debug, Default)]
pub struct DeclarationArena {
    decls: Vec<Declaration>,
    by_span: HashMap<Span, DeclId>,
}

impl DeclarationArena {
    pub fn push(&mut self, decl: Declaration) -> DeclId {
        let id = self.decls.len();
        self.by_span.insert(decl.span, id);
        self.decls.push(decl);
        id
    }

    pub fn get(&self, id: DeclId) -> &Declaration {
        &self.decls[id]
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn site_at(&self, span: Span) -> Option<DeclId> {
        self.by_span.get(&span).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> + '_ {
        self.decls.iter().enumerate()
    }

    /// The unique module-scope declaration of `name`: variable declarators
    /// are searched first, then function declarations. Zero or several
    /// candidates of a kind disqualify that kind entirely.
    pub fn find_top_level(&self, name: &Atom) -> Option<DeclId> {
        for kind in [DeclKind::Var, DeclKind::Fn] {
            let mut candidates = self.iter().filter(|(_, decl)| {
                decl.top_level && decl.kind == kind && decl.lookup_name.as_ref() == Some(name)
            });
            if let (Some((id, _)), None) = (candidates.next(), candidates.next()) {
                return Some(id);
            }
        }
        None
    }
}
