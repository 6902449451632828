use std::sync::Arc;

use anyhow::Result;
use swc_core::common::sync::Lrc;
use swc_core::common::{Globals, SourceMap};
use tracing::debug;

use crate::ast::js_ast::JsAst;
use crate::config::Config;
use crate::shake;

pub struct Context {
    pub config: Config,
    pub meta: Meta,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            config: Config::default(),
            meta: Meta::new(),
        }
    }
}

pub struct Meta {
    pub script: ScriptMeta,
}

impl Meta {
    pub fn new() -> Self {
        Self {
            script: ScriptMeta::new(),
        }
    }
}

pub struct ScriptMeta {
    pub cm: Lrc<SourceMap>,
    pub globals: Globals,
}

impl ScriptMeta {
    fn new() -> Self {
        Self {
            cm: Default::default(),
            globals: Globals::new(),
        }
    }
}

pub struct TransformOutput {
    pub code: String,
    /// False when the module had no dead declarations and the output is a
    /// plain re-emission of the input.
    pub modified: bool,
}

pub struct Compiler {
    pub context: Arc<Context>,
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        Self {
            context: Arc::new(Context {
                config,
                meta: Meta::new(),
            }),
        }
    }

    /// Runs the whole pipeline on one module's source text: parse, resolve
    /// scopes, shake, re-emit.
    pub fn transform(&self, source: String, path: &str) -> Result<TransformOutput> {
        let mut ast = JsAst::parse(source, path, self.context.clone())?;
        let modified = shake::tree_shake(&mut ast.ast)?;
        debug!(path, modified, "tree shake finished");
        let code = ast.generate()?;
        Ok(TransformOutput { code, modified })
    }
}
