use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

use super::ast::{PatternAst, PatternToken};
use super::parser::parse_pattern;
use super::{PatternError, PatternResult};

pub type ParamNames = SmallVec<[String; 4]>;

const PARAM_GROUP_PREFIX: &str = "texivia_p";
const WILDCARD_FRAGMENT: &str = "(^(?s:.*)$)";

/// `pattern` is only present when there is something to extract.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub template: String,
    pub ast: PatternAst,
    pub pattern: Option<Regex>,
    pub pattern_source: String,
    pub dispatch_fragment: String,
    pub dispatch_groups: usize,
    pub param_names: ParamNames,
}

impl CompiledPattern {
    pub fn is_wildcard(&self) -> bool {
        self.ast.is_wildcard()
    }

    pub fn has_params(&self) -> bool {
        !self.param_names.is_empty()
    }
}

// positional names keep `$` and repeated names away from the regex engine
pub fn param_group_name(index: usize) -> String {
    format!("{PARAM_GROUP_PREFIX}{index}")
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(template = %template, case_sensitive = case_sensitive)
)]
pub fn compile_template(template: &str, case_sensitive: bool) -> PatternResult<CompiledPattern> {
    let ast = parse_pattern(template)?;

    if ast.is_wildcard() {
        return Ok(CompiledPattern {
            template: template.to_string(),
            ast,
            pattern: None,
            pattern_source: "^(?s:.*)$".to_string(),
            dispatch_fragment: WILDCARD_FRAGMENT.to_string(),
            dispatch_groups: 1,
            param_names: ParamNames::new(),
        });
    }

    let mut pattern_source = String::from("^");
    let mut dispatch_fragment = String::from("(^");
    let mut param_names = ParamNames::new();

    for token in ast.tokens() {
        match token {
            PatternToken::Literal(text) => {
                let escaped = regex::escape(text);
                pattern_source.push('/');
                pattern_source.push_str(&escaped);
                dispatch_fragment.push('/');
                dispatch_fragment.push_str(&escaped);
            }
            PatternToken::Parameter(param) => {
                let group = param_group_name(param_names.len());
                pattern_source.push_str(&format!("/(?<{}>{})", group, param.pattern()));
                dispatch_fragment.push_str(&format!("/(?:{})", param.pattern()));
                param_names.push(param.name.clone());
            }
            PatternToken::Slash => {
                pattern_source.push('/');
                dispatch_fragment.push('/');
            }
        }
    }

    pattern_source.push('$');
    dispatch_fragment.push_str("$)");

    let pattern = if param_names.is_empty() {
        None
    } else {
        Some(build_regex(&pattern_source, case_sensitive, template)?)
    };

    let dispatch_groups = build_regex(&dispatch_fragment, case_sensitive, template)?
        .captures_len()
        .saturating_sub(1);

    tracing::trace!(
        pattern = %pattern_source,
        fragment = %dispatch_fragment,
        params = param_names.len() as u64,
        "compiled route template"
    );

    Ok(CompiledPattern {
        template: template.to_string(),
        ast,
        pattern,
        pattern_source,
        dispatch_fragment,
        dispatch_groups,
        param_names,
    })
}

fn build_regex(source: &str, case_sensitive: bool, template: &str) -> PatternResult<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|err| PatternError::InvalidRegex {
            path: template.to_string(),
            error: err.to_string(),
        })
}
