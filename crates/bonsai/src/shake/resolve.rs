use crate::shake::declaration::{DeclId, DeclKind};
use crate::shake::error::ShakeError;
use crate::shake::reference_collector::Reference;
use crate::shake::scope::ScopeResolver;

/// Kinds are tried in this order; the first kind with any candidate decides
/// the resolution.
const PRIORITY: [DeclKind; 4] = [
    DeclKind::ImportNamed,
    DeclKind::Var,
    DeclKind::Fn,
    DeclKind::ImportDefault,
];

/// Resolves a use to its origin declaration. `Ok(None)` means the name has no
/// visible declaration at all; a kind with several distinct candidates is an
/// error rather than a silent miss.
pub fn resolve_origin<R>(resolver: &R, reference: &Reference) -> Result<Option<DeclId>, ShakeError>
where
    R: ScopeResolver + ?Sized,
{
    let Some(bindings) = resolver.bindings_of(&reference.id) else {
        return Ok(None);
    };
    for kind in PRIORITY {
        let mut candidates: Vec<DeclId> = bindings
            .iter()
            .filter_map(|node| node.of_kind(kind))
            .collect();
        candidates.sort_unstable();
        candidates.dedup();
        match candidates.as_slice() {
            [] => continue,
            [origin] => return Ok(Some(*origin)),
            _ => {
                return Err(ShakeError::AmbiguousBinding {
                    name: reference.id.0.to_string(),
                })
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use swc_core::common::SyntaxContext;
    use swc_core::ecma::ast::Id;

    use super::*;
    use crate::shake::scope::BindingNode;

    struct FakeResolver(HashMap<Id, Vec<BindingNode>>);

    impl ScopeResolver for FakeResolver {
        fn bindings_of(&self, id: &Id) -> Option<&[BindingNode]> {
            self.0.get(id).map(Vec::as_slice)
        }
    }

    fn id(name: &str) -> Id {
        (name.into(), SyntaxContext::empty())
    }

    fn reference(name: &str) -> Reference {
        Reference {
            id: id(name),
            jsx_tag: false,
        }
    }

    #[test]
    fn test_free_identifier_resolves_to_none() {
        let resolver = FakeResolver(HashMap::new());
        assert_eq!(resolve_origin(&resolver, &reference("x")).unwrap(), None);
    }

    #[test]
    fn test_named_import_wins_over_default_import() {
        let resolver = FakeResolver(HashMap::from([(
            id("x"),
            vec![BindingNode {
                import: Some(3),
                default_import: Some(7),
                ..Default::default()
            }],
        )]));
        assert_eq!(resolve_origin(&resolver, &reference("x")).unwrap(), Some(3));
    }

    #[test]
    fn test_declarator_wins_over_enclosing_function() {
        let resolver = FakeResolver(HashMap::from([(
            id("x"),
            vec![BindingNode {
                var_declarator: Some(1),
                fn_decl: Some(2),
                ..Default::default()
            }],
        )]));
        assert_eq!(resolve_origin(&resolver, &reference("x")).unwrap(), Some(1));
    }

    #[test]
    fn test_same_kind_twice_is_ambiguous() {
        let resolver = FakeResolver(HashMap::from([(
            id("x"),
            vec![
                BindingNode {
                    var_declarator: Some(1),
                    ..Default::default()
                },
                BindingNode {
                    var_declarator: Some(2),
                    ..Default::default()
                },
            ],
        )]));
        assert_eq!(
            resolve_origin(&resolver, &reference("x")).unwrap_err(),
            ShakeError::AmbiguousBinding { name: "x".into() }
        );
    }

    #[test]
    fn test_duplicate_occurrences_of_one_site_are_not_ambiguous() {
        let resolver = FakeResolver(HashMap::from([(
            id("x"),
            vec![
                BindingNode {
                    var_declarator: Some(1),
                    ..Default::default()
                },
                BindingNode {
                    var_declarator: Some(1),
                    ..Default::default()
                },
            ],
        )]));
        assert_eq!(resolve_origin(&resolver, &reference("x")).unwrap(), Some(1));
    }

    #[test]
    fn test_originless_binding_resolves_to_none() {
        let resolver = FakeResolver(HashMap::from([(id("ns"), vec![BindingNode::default()])]));
        assert_eq!(resolve_origin(&resolver, &reference("ns")).unwrap(), None);
    }
}
