mod errors;
mod listeners;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_EVENT_NAME, DEFAULT_GOTO_EVENT_NAME, DEFAULT_MAX_REDIRECTS, RouterOptions,
    RouterOptionsBuilder, RouterOptionsError,
};
pub use service::{Router, RouterBuilder};
