use thiserror::Error;

/// Analysis failures. Every kind aborts the whole transform before the tree
/// is mutated; there is no partial output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShakeError {
    /// An export names a binding with no unique top-level declaration.
    #[error("could not find exported thing: {name}")]
    UnresolvedExport { name: String },
    /// A use inside live code has no visible declaration and is neither a
    /// built-in element tag nor a known global. Treating such a name as
    /// dead-safe could destroy a live, externally-bound reference.
    #[error("variable name ({name}) reference does not exist")]
    UnresolvedReference { name: String },
    /// Several same-kind declarations of the name are visible at once.
    #[error("ambiguous binding for ({name})")]
    AmbiguousBinding { name: String },
}
