use swc_core::ecma::ast::{
    AssignTargetPat, BindingIdent, ClassDecl, ClassExpr, Decl, FnDecl, FnExpr, ImportDecl,
    ImportSpecifier, Module, ModuleDecl, ModuleItem, Pat, SimpleAssignTarget, Stmt, VarDecl,
    VarDeclarator,
};
use swc_core::ecma::visit::{Visit, VisitWith};

use crate::shake::declaration::{DeclId, DeclKind, Declaration, DeclarationArena};
use crate::shake::reference_collector::collect_references;
use crate::shake::scope::{AstScopeIndex, BindingNode};

/// Walks the module once, producing the declaration arena and the binding
/// index the scope oracle answers from. Sites created while iterating the
/// module body directly are top-level; everything reached through the
/// visitor is nested.
pub fn collect(module: &Module) -> (DeclarationArena, AstScopeIndex) {
    let mut collector = Collector::default();
    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => collector.collect_import(import),
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
                Decl::Var(decl) => collector.collect_var_decl(decl, true),
                Decl::Fn(decl) => collector.collect_fn_decl(decl, true),
                decl => decl.visit_with(&mut collector),
            },
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(decl))) => collector.collect_var_decl(decl, true),
            ModuleItem::Stmt(Stmt::Decl(Decl::Fn(decl))) => collector.collect_fn_decl(decl, true),
            item => item.visit_with(&mut collector),
        }
    }
    (collector.arena, collector.index)
}

#[derive(Default)]
struct Collector {
    arena: DeclarationArena,
    index: AstScopeIndex,
    // innermost enclosing sites during the walk; binding occurrences found
    // underneath resolve to these
    var_stack: Vec<DeclId>,
    fn_stack: Vec<DeclId>,
}

impl Collector {
    fn binding_here(&self) -> BindingNode {
        BindingNode {
            var_declarator: self.var_stack.last().copied(),
            fn_decl: self.fn_stack.last().copied(),
            ..Default::default()
        }
    }

    fn collect_import(&mut self, import: &ImportDecl) {
        for specifier in &import.specifiers {
            match specifier {
                ImportSpecifier::Named(named) => {
                    let id = self.arena.push(Declaration {
                        kind: DeclKind::ImportNamed,
                        span: named.span,
                        top_level: true,
                        lookup_name: None,
                        refs: vec![],
                    });
                    self.index.add(
                        named.local.to_id(),
                        BindingNode {
                            import: Some(id),
                            ..Default::default()
                        },
                    );
                }
                ImportSpecifier::Default(default) => {
                    let id = self.arena.push(Declaration {
                        kind: DeclKind::ImportDefault,
                        span: default.span,
                        top_level: true,
                        lookup_name: None,
                        refs: vec![],
                    });
                    self.index.add(
                        default.local.to_id(),
                        BindingNode {
                            default_import: Some(id),
                            ..Default::default()
                        },
                    );
                }
                // a namespace binding has no origin kind; recording it keeps
                // its uses distinguishable from free identifiers
                ImportSpecifier::Namespace(namespace) => {
                    self.index.add(namespace.local.to_id(), BindingNode::default());
                }
            }
        }
    }

    fn collect_var_decl(&mut self, decl: &VarDecl, top_level: bool) {
        for declarator in &decl.decls {
            self.collect_var_declarator(declarator, top_level);
        }
    }

    fn collect_var_declarator(&mut self, declarator: &VarDeclarator, top_level: bool) {
        let lookup_name = match &declarator.name {
            Pat::Ident(name) => Some(name.id.sym.clone()),
            _ => None,
        };
        let id = self.arena.push(Declaration {
            kind: DeclKind::Var,
            span: declarator.span,
            top_level,
            lookup_name,
            refs: collect_references(declarator),
        });
        self.var_stack.push(id);
        declarator.visit_children_with(self);
        self.var_stack.pop();
    }

    fn collect_fn_decl(&mut self, decl: &FnDecl, top_level: bool) {
        let id = self.arena.push(Declaration {
            kind: DeclKind::Fn,
            span: decl.function.span,
            top_level,
            lookup_name: Some(decl.ident.sym.clone()),
            refs: collect_references(decl),
        });
        let mut node = self.binding_here();
        node.fn_decl = Some(id);
        self.index.add(decl.ident.to_id(), node);
        self.fn_stack.push(id);
        decl.function.visit_with(self);
        self.fn_stack.pop();
    }
}

impl Visit for Collector {
    fn visit_var_declarator(&mut self, declarator: &VarDeclarator) {
        self.collect_var_declarator(declarator, false);
    }

    fn visit_fn_decl(&mut self, decl: &FnDecl) {
        self.collect_fn_decl(decl, false);
    }

    fn visit_binding_ident(&mut self, name: &BindingIdent) {
        let node = self.binding_here();
        self.index.add(name.id.to_id(), node);
    }

    // assignments write to existing bindings, they do not declare
    fn visit_simple_assign_target(&mut self, target: &SimpleAssignTarget) {
        if !matches!(target, SimpleAssignTarget::Ident(_)) {
            target.visit_children_with(self);
        }
    }

    fn visit_assign_target_pat(&mut self, _: &AssignTargetPat) {}

    fn visit_fn_expr(&mut self, expr: &FnExpr) {
        if let Some(ident) = &expr.ident {
            self.index.add(ident.to_id(), self.binding_here());
        }
        expr.function.visit_with(self);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        self.index.add(decl.ident.to_id(), self.binding_here());
        decl.class.visit_with(self);
    }

    fn visit_class_expr(&mut self, expr: &ClassExpr) {
        if let Some(ident) = &expr.ident {
            self.index.add(ident.to_id(), self.binding_here());
        }
        expr.class.visit_with(self);
    }
}
