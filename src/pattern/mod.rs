mod ast;
mod compiled;
mod error;
mod parser;

pub use ast::{ParameterToken, PatternAst, PatternToken};
pub use compiled::{CompiledPattern, ParamNames, compile_template, param_group_name};
pub use error::{PatternError, PatternResult};
pub use parser::parse_pattern;

pub const DEFAULT_PARAM_PATTERN: &str = "[^/]+";
pub const WILDCARD: &str = "*";
