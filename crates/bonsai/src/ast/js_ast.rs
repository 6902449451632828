use std::sync::Arc;

use anyhow::{anyhow, Result};
use swc_core::common::comments::SingleThreadedComments;
use swc_core::common::{FileName, Mark, GLOBALS};
use swc_core::ecma::ast::{EsVersion, Module};
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config as JsCodegenConfig, Emitter};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{Parser, StringInput};
use swc_core::ecma::transforms::base::resolver;
use swc_core::ecma::visit::VisitMutWith;

use crate::ast::error::{GenerateError, ParseError};
use crate::compiler::Context;

/// One parsed module plus the marks assigned by the resolver pass. All
/// identifiers in `ast` carry a `SyntaxContext` identifying their scope once
/// `parse` returns.
pub struct JsAst {
    pub ast: Module,
    pub unresolved_mark: Mark,
    pub top_level_mark: Mark,
    comments: SingleThreadedComments,
    context: Arc<Context>,
}

impl JsAst {
    pub fn parse(source: String, path: &str, context: Arc<Context>) -> Result<Self> {
        let fm = context
            .meta
            .script
            .cm
            .new_source_file(FileName::Real(path.into()).into(), source);
        let comments = SingleThreadedComments::default();
        let syntax = context.config.dialect.syntax();
        let lexer = Lexer::new(
            syntax,
            EsVersion::EsNext,
            StringInput::from(&*fm),
            Some(&comments),
        );
        let mut parser = Parser::new_from(lexer);
        let ast = parser.parse_module();

        let mut errors = parser.take_errors();
        if let Err(err) = &ast {
            errors.push(err.clone());
        }
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|err| err.kind().msg().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(anyhow!(ParseError::JsParseError { messages }));
        }
        let mut ast = ast.unwrap();

        // scope resolution happens once, at parse time; the marks are kept so
        // later passes can tell module-level and unresolved names apart
        let context_for_struct = context.clone();
        GLOBALS.set(&context.meta.script.globals, || {
            let unresolved_mark = Mark::new();
            let top_level_mark = Mark::new();
            ast.visit_mut_with(&mut resolver(
                unresolved_mark,
                top_level_mark,
                context.config.dialect.is_typescript(),
            ));
            Ok(JsAst {
                ast,
                unresolved_mark,
                top_level_mark,
                comments,
                context: context_for_struct,
            })
        })
    }

    pub fn generate(&self) -> Result<String> {
        let cm = self.context.meta.script.cm.clone();
        let mut buf = vec![];
        {
            let mut emitter = Emitter {
                cfg: JsCodegenConfig::default(),
                cm: cm.clone(),
                comments: Some(&self.comments),
                wr: Box::new(JsWriter::new(cm, "\n", &mut buf, None)),
            };
            emitter.emit_module(&self.ast).map_err(|err| {
                anyhow!(GenerateError::JsGenerateError {
                    message: err.to_string()
                })
            })?;
        }
        String::from_utf8(buf).map_err(|err| {
            anyhow!(GenerateError::JsGenerateError {
                message: err.to_string()
            })
        })
    }
}
