use memchr::{memchr, memchr3, memrchr};
use regex::Regex;

use crate::pattern::ast::{ParameterToken, PatternAst, PatternToken};
use crate::pattern::{PatternError, PatternResult, WILDCARD};

#[tracing::instrument(level = "trace", skip_all, fields(template = %template))]
pub fn parse_pattern(template: &str) -> PatternResult<PatternAst> {
    if template == WILDCARD {
        return Ok(PatternAst::Wildcard);
    }

    let mut parser = PatternParser::new(template);
    let mut tokens = Vec::new();
    while !parser.is_done() {
        match parser.next_token() {
            Some(token) => tokens.push(token),
            None => {
                return Err(PatternError::Malformed {
                    path: template.to_string(),
                    index: parser.position(),
                });
            }
        }
    }

    if tokens.is_empty() {
        return Err(PatternError::Malformed {
            path: template.to_string(),
            index: 0,
        });
    }

    let ast = PatternAst::Tokens(tokens);
    if ast.to_template() != template {
        return Err(PatternError::Malformed {
            path: template.to_string(),
            index: 0,
        });
    }

    validate_constraints(&ast, template)?;
    Ok(ast)
}

struct PatternParser<'a> {
    template: &'a str,
    index: usize,
}

impl<'a> PatternParser<'a> {
    fn new(template: &'a str) -> Self {
        Self { template, index: 0 }
    }

    fn is_done(&self) -> bool {
        self.index >= self.template.len()
    }

    fn position(&self) -> usize {
        self.index
    }

    fn next_token(&mut self) -> Option<PatternToken> {
        let rest = &self.template[self.index..];
        let body = rest.strip_prefix('/')?;

        let literal_len = memchr3(b'/', b'{', b'}', body.as_bytes()).unwrap_or(body.len());
        if literal_len > 0 {
            self.index += 1 + literal_len;
            return Some(PatternToken::Literal(body[..literal_len].to_string()));
        }

        if let Some((param, consumed)) = parse_parameter(body) {
            self.index += 1 + consumed;
            return Some(PatternToken::Parameter(param));
        }

        self.index += 1;
        Some(PatternToken::Slash)
    }
}

fn parse_parameter(body: &str) -> Option<(ParameterToken, usize)> {
    let inner = body.strip_prefix('{')?;
    let name_len = identifier_len(inner);
    if name_len == 0 {
        return None;
    }

    let name = inner[..name_len].to_string();
    let after = &inner[name_len..];
    match after.as_bytes().first() {
        Some(b'}') => Some((ParameterToken::new(name, None), name_len + 2)),
        Some(b':') => {
            let run = &after[1..];
            let run = &run[..memchr(b'/', run.as_bytes()).unwrap_or(run.len())];
            // the custom pattern is greedy: it ends before the last brace of the run
            let close = memrchr(b'}', run.as_bytes())?;
            if close == 0 {
                return None;
            }
            let constraint = run[..close].to_string();
            Some((
                ParameterToken::new(name, Some(constraint)),
                name_len + close + 3,
            ))
        }
        _ => None,
    }
}

fn identifier_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' || *b == b'$' => {}
        _ => return 0,
    }

    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_' || **b == b'$')
        .count()
}

fn validate_constraints(ast: &PatternAst, template: &str) -> PatternResult<()> {
    for param in ast.parameters() {
        if let Some(constraint) = &param.constraint {
            let source = format!("^(?:{})$", constraint);
            if let Err(err) = Regex::new(&source) {
                return Err(PatternError::InvalidConstraint {
                    path: template.to_string(),
                    name: param.name.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(template: &str) -> Vec<PatternToken> {
        parse_pattern(template)
            .expect("template should parse")
            .tokens()
            .to_vec()
    }

    #[test]
    fn splits_literals_parameters_and_slashes() {
        assert_eq!(
            tokens("/users/{id}/"),
            vec![
                PatternToken::Literal("users".to_string()),
                PatternToken::Parameter(ParameterToken::new("id".to_string(), None)),
                PatternToken::Slash,
            ]
        );
    }

    #[test]
    fn custom_pattern_extends_to_last_brace_of_segment() {
        let parsed = tokens("/{year:\\d{4}}/events");
        match &parsed[0] {
            PatternToken::Parameter(param) => {
                assert_eq!(param.name, "year");
                assert_eq!(param.constraint.as_deref(), Some("\\d{4}"));
            }
            other => panic!("expected parameter token, got {other:?}"),
        }
        assert_eq!(parsed[1], PatternToken::Literal("events".to_string()));
    }

    #[test]
    fn accepts_dollar_in_parameter_names() {
        let parsed = tokens("/{$ref}");
        assert_eq!(
            parsed,
            vec![PatternToken::Parameter(ParameterToken::new(
                "$ref".to_string(),
                None
            ))]
        );
    }

    #[test]
    fn doubled_slash_yields_bare_slash_token() {
        assert_eq!(
            tokens("/user//x"),
            vec![
                PatternToken::Literal("user".to_string()),
                PatternToken::Slash,
                PatternToken::Literal("x".to_string()),
            ]
        );
    }

    #[test]
    fn reports_offset_of_unrecognized_input() {
        let err = parse_pattern("/user/{id:\\d+/").unwrap_err();
        match err {
            PatternError::Malformed { index, .. } => assert_eq!(index, 6),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_template() {
        assert!(matches!(
            parse_pattern(""),
            Err(PatternError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_parameter_without_name() {
        assert!(parse_pattern("/{}").is_err());
        assert!(parse_pattern("/{1id}").is_err());
        assert!(parse_pattern("/{id:}").is_err());
    }

    #[test]
    fn rejects_invalid_custom_pattern() {
        let err = parse_pattern("/users/{id:[}").unwrap_err();
        match err {
            PatternError::InvalidConstraint { name, .. } => assert_eq!(name, "id"),
            other => panic!("expected InvalidConstraint, got {other:?}"),
        }
    }
}
