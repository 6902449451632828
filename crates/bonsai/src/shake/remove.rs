use std::collections::HashSet;

use swc_core::common::Span;
use swc_core::ecma::ast::{Decl, ImportSpecifier, Module, ModuleDecl, ModuleItem, Stmt};
use swc_core::ecma::visit::VisitMut;

use crate::shake::declaration::{DeclId, DeclarationArena};

/// Deletes declarations absent from the live-set. A declarator or import
/// specifier is dropped from its list; the enclosing statement goes with it
/// when its last element is removed. Only top-level statements are touched,
/// so locals inside live functions are never deleted.
pub struct TreeShakeRemover<'a> {
    arena: &'a DeclarationArena,
    live: &'a HashSet<DeclId>,
    pub removed: usize,
}

impl<'a> TreeShakeRemover<'a> {
    pub fn new(arena: &'a DeclarationArena, live: &'a HashSet<DeclId>) -> Self {
        Self {
            arena,
            live,
            removed: 0,
        }
    }

    fn is_dead(&self, span: Span) -> bool {
        self.arena
            .site_at(span)
            .is_some_and(|id| !self.live.contains(&id))
    }

    fn keep_item(&mut self, item: &mut ModuleItem) -> bool {
        match item {
            ModuleItem::Stmt(Stmt::Decl(Decl::Fn(decl))) => {
                if self.is_dead(decl.function.span) {
                    self.removed += 1;
                    return false;
                }
                true
            }
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(decl))) => {
                let before = decl.decls.len();
                decl.decls
                    .retain(|declarator| !self.is_dead(declarator.span));
                self.removed += before - decl.decls.len();
                !decl.decls.is_empty()
            }
            // bare side-effect imports have no specifiers and stay untouched
            ModuleItem::ModuleDecl(ModuleDecl::Import(import))
                if !import.specifiers.is_empty() =>
            {
                let before = import.specifiers.len();
                import.specifiers.retain(|specifier| {
                    let span = match specifier {
                        ImportSpecifier::Named(named) => named.span,
                        ImportSpecifier::Default(default) => default.span,
                        ImportSpecifier::Namespace(namespace) => namespace.span,
                    };
                    !self.is_dead(span)
                });
                self.removed += before - import.specifiers.len();
                !import.specifiers.is_empty()
            }
            _ => true,
        }
    }
}

impl VisitMut for TreeShakeRemover<'_> {
    fn visit_mut_module(&mut self, module: &mut Module) {
        module.body.retain_mut(|item| self.keep_item(item));
    }
}
