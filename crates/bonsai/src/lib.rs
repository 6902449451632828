pub mod cli;
pub mod compiler;
pub mod config;

mod ast;
mod shake;

pub use compiler::{Compiler, TransformOutput};
pub use config::{Config, Dialect};
pub use shake::ShakeError;
