use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use swc_core::ecma::parser::{EsSyntax, Syntax, TsSyntax};

/// Parser grammar for the input module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Es,
    Jsx,
    Ts,
    Tsx,
}

impl Dialect {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jsx") => Dialect::Jsx,
            Some("ts") => Dialect::Ts,
            Some("tsx") => Dialect::Tsx,
            _ => Dialect::Es,
        }
    }

    pub fn syntax(&self) -> Syntax {
        match self {
            Dialect::Es => Syntax::Es(EsSyntax::default()),
            Dialect::Jsx => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            Dialect::Ts => Syntax::Typescript(TsSyntax::default()),
            Dialect::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                ..Default::default()
            }),
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Dialect::Ts | Dialect::Tsx)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dialect: Dialect,
}
