#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternAst {
    Wildcard,
    Tokens(Vec<PatternToken>),
}

impl PatternAst {
    pub fn tokens(&self) -> &[PatternToken] {
        match self {
            Self::Wildcard => &[],
            Self::Tokens(tokens) => tokens,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &ParameterToken> {
        self.tokens().iter().filter_map(|token| match token {
            PatternToken::Parameter(param) => Some(param),
            _ => None,
        })
    }

    pub fn to_template(&self) -> String {
        match self {
            Self::Wildcard => super::WILDCARD.to_string(),
            Self::Tokens(tokens) => tokens.iter().map(PatternToken::source).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Literal(String),
    Parameter(ParameterToken),
    Slash,
}

impl PatternToken {
    pub fn source(&self) -> String {
        match self {
            Self::Literal(text) => format!("/{text}"),
            Self::Parameter(param) => match &param.constraint {
                Some(constraint) => format!("/{{{}:{}}}", param.name, constraint),
                None => format!("/{{{}}}", param.name),
            },
            Self::Slash => "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterToken {
    pub name: String,
    pub constraint: Option<String>,
}

impl ParameterToken {
    pub fn new(name: String, constraint: Option<String>) -> Self {
        Self { name, constraint }
    }

    pub fn pattern(&self) -> &str {
        self.constraint
            .as_deref()
            .unwrap_or(super::DEFAULT_PARAM_PATTERN)
    }
}
