use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::shake::declaration::{DeclId, DeclarationArena};
use crate::shake::error::ShakeError;
use crate::shake::intrinsics;
use crate::shake::reference_collector::Reference;
use crate::shake::resolve::resolve_origin;
use crate::shake::scope::ScopeResolver;

/// Worklist expansion of the live-set: pop a live declaration, resolve the
/// references inside it, enqueue what they reach. The set only grows and is
/// bounded by the arena, so the loop terminates.
pub struct ReachabilityEngine<'a, R: ScopeResolver + ?Sized> {
    arena: &'a DeclarationArena,
    resolver: &'a R,
}

impl<'a, R: ScopeResolver + ?Sized> ReachabilityEngine<'a, R> {
    pub fn new(arena: &'a DeclarationArena, resolver: &'a R) -> Self {
        Self { arena, resolver }
    }

    /// Expands `roots` to the fixed point of declarations reachable through
    /// references. `seeds` are references held by export constructs that are
    /// not themselves declaration sites.
    pub fn run(
        &self,
        roots: &[DeclId],
        seeds: &[Reference],
    ) -> Result<HashSet<DeclId>, ShakeError> {
        let mut live: HashSet<DeclId> = roots.iter().copied().collect();
        let mut queue: VecDeque<DeclId> = live.iter().copied().collect();

        for reference in seeds {
            self.follow(reference, &mut live, &mut queue)?;
        }
        while let Some(id) = queue.pop_front() {
            for reference in &self.arena.get(id).refs {
                self.follow(reference, &mut live, &mut queue)?;
            }
        }

        debug!(
            live = live.len(),
            total = self.arena.len(),
            "reachability fixed point"
        );
        Ok(live)
    }

    fn follow(
        &self,
        reference: &Reference,
        live: &mut HashSet<DeclId>,
        queue: &mut VecDeque<DeclId>,
    ) -> Result<(), ShakeError> {
        match resolve_origin(self.resolver, reference)? {
            Some(origin) => {
                if live.insert(origin) {
                    queue.push_back(origin);
                }
            }
            None => {
                let name = &reference.id.0;
                if reference.jsx_tag && intrinsics::is_intrinsic_element(name) {
                    return Ok(());
                }
                if intrinsics::is_known_global(name) {
                    return Ok(());
                }
                return Err(ShakeError::UnresolvedReference {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}
