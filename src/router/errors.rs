use crate::navigation::HookError;
use crate::pattern::PatternError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no routes were specified")]
    NoRoutes,
    #[error("route name '{name}' is used more than once")]
    DuplicateRouteName { name: String },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("combined route pattern failed to compile: {0}")]
    Dispatch(#[from] regex::Error),
    #[error("named route '{name}' not found")]
    UnknownRoute { name: String },
    #[error("missing required parameter: {name} for route '{route}'")]
    MissingParameter { name: String, route: String },
    #[error("route '{name}' is the wildcard route; no URL can be generated for it")]
    NotGeneratable { name: String },
    #[error("redirect limit exceeded after {depth} hops while resolving '{path}'")]
    RedirectLoop { path: String, depth: usize },
    #[error("navigation hook failed: {0}")]
    Hook(#[source] HookError),
    #[error("router is already started")]
    AlreadyStarted,
}

pub type RouterResult<T> = Result<T, RouterError>;
