pub(crate) mod collect;
pub(crate) mod declaration;
pub(crate) mod error;
pub(crate) mod intrinsics;
pub(crate) mod reachability;
pub(crate) mod reference_collector;
pub(crate) mod remove;
pub(crate) mod resolve;
pub(crate) mod roots;
pub(crate) mod scope;

use swc_core::ecma::ast::Module;
use swc_core::ecma::visit::VisitMutWith;
use tracing::debug;

pub use self::error::ShakeError;

use crate::shake::reachability::ReachabilityEngine;
use crate::shake::remove::TreeShakeRemover;

/// Removes every top-level declaration and import specifier not reachable
/// from the module's exports. The module must already have been through the
/// resolver pass. Returns whether anything was removed.
pub fn tree_shake(module: &mut Module) -> Result<bool, ShakeError> {
    let (arena, scopes) = collect::collect(module);
    let roots = roots::collect_roots(module, &arena)?;
    debug!(
        sites = arena.len(),
        roots = roots.sites.len(),
        "collected declaration sites"
    );

    let live = ReachabilityEngine::new(&arena, &scopes).run(&roots.sites, &roots.seeds)?;

    let mut remover = TreeShakeRemover::new(&arena, &live);
    module.visit_mut_with(&mut remover);
    debug!(removed = remover.removed, "dead declarations removed");
    Ok(remover.removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::tests::TestUtils;

    fn shake(code: &str) -> (String, bool) {
        let mut tu = TestUtils::gen_js_ast(code);
        let modified = tree_shake(&mut tu.ast.ast).unwrap();
        (tu.js_code(), modified)
    }

    fn shake_jsx(code: &str) -> String {
        let mut tu = TestUtils::gen_jsx_ast(code);
        tree_shake(&mut tu.ast.ast).unwrap();
        tu.js_code()
    }

    fn reprint(code: &str) -> String {
        TestUtils::gen_js_ast(code).js_code()
    }

    fn reprint_jsx(code: &str) -> String {
        TestUtils::gen_jsx_ast(code).js_code()
    }

    #[test]
    fn test_unused_import_specifiers_are_dropped() {
        let (code, modified) = shake(
            r#"
            import { A, B, C } from 'm';
            const x = () => A();
            export function main() {
                x();
            }
            "#,
        );
        assert!(modified);
        assert_eq!(
            code,
            reprint(
                r#"
                import { A } from 'm';
                const x = () => A();
                export function main() {
                    x();
                }
                "#
            )
        );
    }

    #[test]
    fn test_unused_const_is_dropped() {
        let (code, _) = shake(
            r#"
            const unused = () => {};
            const f = () => 'v';
            export function main() {
                return f();
            }
            "#,
        );
        assert_eq!(
            code,
            reprint(
                r#"
                const f = () => 'v';
                export function main() {
                    return f();
                }
                "#
            )
        );
    }

    #[test]
    fn test_default_export_keeps_only_its_function() {
        let (code, _) = shake("function a() {}\nfunction b() {}\nexport default a;");
        assert_eq!(code, reprint("function a() {}\nexport default a;"));
    }

    #[test]
    fn test_default_import_survives_when_used() {
        let (code, _) = shake(
            r#"
            import Default from 'x';
            const y = 1;
            export function m() {
                return Default;
            }
            "#,
        );
        assert_eq!(
            code,
            reprint(
                r#"
                import Default from 'x';
                export function m() {
                    return Default;
                }
                "#
            )
        );
    }

    #[test]
    fn test_intrinsic_tag_needs_no_declaration() {
        let code = shake_jsx(
            r#"
            export function App() {
                return <div/>;
            }
            "#,
        );
        assert_eq!(
            code,
            reprint_jsx(
                r#"
                export function App() {
                    return <div/>;
                }
                "#
            )
        );
    }

    #[test]
    fn test_renamed_export_specifier_roots_local_name() {
        let (code, modified) = shake("const a = 1;\nexport { a as b };");
        assert!(!modified);
        assert_eq!(code, reprint("const a = 1;\nexport { a as b };"));
    }

    #[test]
    fn test_declarator_list_keeps_live_elements() {
        let (code, _) = shake(
            r#"
            const a = 1, b = 2;
            export function m() {
                return a;
            }
            "#,
        );
        assert_eq!(
            code,
            reprint(
                r#"
                const a = 1;
                export function m() {
                    return a;
                }
                "#
            )
        );
    }

    #[test]
    fn test_import_statement_collapses_with_last_specifier() {
        let (code, _) = shake(
            r#"
            import { A, B } from 'm';
            import Other from 'o';
            export function m() {}
            "#,
        );
        assert_eq!(code, reprint("export function m() {}"));
    }

    #[test]
    fn test_mixed_import_keeps_named_half() {
        let (code, _) = shake(
            r#"
            import React, { useCallback } from 'react';
            export function m() {
                return useCallback;
            }
            "#,
        );
        assert_eq!(
            code,
            reprint(
                r#"
                import { useCallback } from 'react';
                export function m() {
                    return useCallback;
                }
                "#
            )
        );
    }

    #[test]
    fn test_bare_import_is_preserved() {
        let (code, _) = shake("import 'polyfill';\nexport function m() {}");
        assert_eq!(code, reprint("import 'polyfill';\nexport function m() {}"));
    }

    #[test]
    fn test_exported_const_declaration_is_a_root() {
        let (code, modified) = shake(
            r#"
            const helper = () => 1;
            export const api = () => helper();
            "#,
        );
        assert!(!modified);
        assert_eq!(
            code,
            reprint(
                r#"
                const helper = () => 1;
                export const api = () => helper();
                "#
            )
        );
    }

    #[test]
    fn test_known_globals_are_not_an_error() {
        let (code, _) = shake(
            r#"
            const dead = 1;
            export function main() {
                console.log(Math.max(1, 2));
            }
            "#,
        );
        assert_eq!(
            code,
            reprint(
                r#"
                export function main() {
                    console.log(Math.max(1, 2));
                }
                "#
            )
        );
    }

    #[test]
    fn test_transform_is_idempotent() {
        let (once, _) = shake(
            r#"
            import { A, B } from 'm';
            const x = () => A();
            const unused = 2;
            export function main() {
                x();
            }
            "#,
        );
        let (twice, modified) = shake(&once);
        assert!(!modified);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_unresolved_reference_is_fatal() {
        let mut tu = TestUtils::gen_js_ast("export function m() { return missing; }");
        let err = tree_shake(&mut tu.ast.ast).unwrap_err();
        assert_eq!(
            err,
            ShakeError::UnresolvedReference {
                name: "missing".into()
            }
        );
    }

    #[test]
    fn test_unresolved_export_is_fatal() {
        let mut tu = TestUtils::gen_js_ast("export { nope };");
        let err = tree_shake(&mut tu.ast.ast).unwrap_err();
        assert_eq!(
            err,
            ShakeError::UnresolvedExport {
                name: "nope".into()
            }
        );
    }

    #[test]
    fn test_duplicate_declarations_are_ambiguous() {
        let mut tu = TestUtils::gen_js_ast("var x = 1;\nvar x = 2;\nexport function m() { return x; }");
        let err = tree_shake(&mut tu.ast.ast).unwrap_err();
        assert_eq!(err, ShakeError::AmbiguousBinding { name: "x".into() });
    }

    #[test]
    fn test_default_exported_expression_keeps_its_references() {
        let (code, _) = shake(
            r#"
            const helper = () => 1;
            const unused = 2;
            export default (() => helper());
            "#,
        );
        assert_eq!(
            code,
            reprint(
                r#"
                const helper = () => 1;
                export default (() => helper());
                "#
            )
        );
    }

    #[test]
    fn test_noop_module_reports_unmodified() {
        let (_, modified) = shake("export function m() { return 1; }");
        assert!(!modified);
    }
}
