use swc_core::ecma::ast::{
    Decl, ExportSpecifier, Expr, Module, ModuleDecl, ModuleExportName, ModuleItem,
};

use crate::shake::declaration::{DeclId, DeclarationArena};
use crate::shake::error::ShakeError;
use crate::shake::reference_collector::{collect_references, Reference};

/// The module's export surface: declaration sites exported directly, plus
/// references held by exported constructs that are not declaration sites
/// themselves (default-exported expressions, exported classes).
#[derive(Debug)]
pub struct ExportRoots {
    pub sites: Vec<DeclId>,
    pub seeds: Vec<Reference>,
}

pub fn collect_roots(
    module: &Module,
    arena: &DeclarationArena,
) -> Result<ExportRoots, ShakeError> {
    let mut sites = vec![];
    let mut seeds = vec![];

    for item in &module.body {
        let ModuleItem::ModuleDecl(decl) = item else {
            continue;
        };
        match decl {
            // e.g.
            // export function f() {}
            // export const a = 1, b = 2;
            ModuleDecl::ExportDecl(export) => match &export.decl {
                Decl::Fn(decl) => sites.push(arena.site_at(decl.function.span).unwrap()),
                Decl::Var(decl) => {
                    for declarator in &decl.decls {
                        sites.push(arena.site_at(declarator.span).unwrap());
                    }
                }
                Decl::Class(decl) => seeds.extend(collect_references(decl)),
                _ => {}
            },
            // e.g.
            // export { a, b as c };
            // `export { x } from 'm'` re-exports without binding anything
            // locally and contributes no root
            ModuleDecl::ExportNamed(export) if export.src.is_none() => {
                for specifier in &export.specifiers {
                    let ExportSpecifier::Named(named) = specifier else {
                        continue;
                    };
                    let ModuleExportName::Ident(local) = &named.orig else {
                        continue;
                    };
                    let site = arena.find_top_level(&local.sym).ok_or_else(|| {
                        ShakeError::UnresolvedExport {
                            name: local.sym.to_string(),
                        }
                    })?;
                    sites.push(site);
                }
            }
            // e.g.
            // export default x;
            ModuleDecl::ExportDefaultExpr(export) => match &*export.expr {
                Expr::Ident(ident) => {
                    let site = arena.find_top_level(&ident.sym).ok_or_else(|| {
                        ShakeError::UnresolvedExport {
                            name: ident.sym.to_string(),
                        }
                    })?;
                    sites.push(site);
                }
                // an anonymous default export roots nothing, but what it
                // references must stay alive
                expr => seeds.extend(collect_references(expr)),
            },
            // e.g.
            // export default function () {}
            ModuleDecl::ExportDefaultDecl(export) => {
                seeds.extend(collect_references(&export.decl))
            }
            _ => {}
        }
    }

    Ok(ExportRoots { sites, seeds })
}
