use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_REDIRECTS: usize = 16;
pub const DEFAULT_EVENT_NAME: &str = "texivia";
pub const DEFAULT_GOTO_EVENT_NAME: &str = "texivia.goto";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    pub ignore_unknown: bool,
    pub case_sensitive: bool,
    pub max_redirects: usize,
    pub event_name: String,
    pub goto_event_name: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            ignore_unknown: false,
            case_sensitive: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            event_name: DEFAULT_EVENT_NAME.to_string(),
            goto_event_name: DEFAULT_GOTO_EVENT_NAME.to_string(),
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if self.max_redirects == 0 {
            return Err(RouterConfigError::MaxRedirectsInvalid {
                provided: self.max_redirects,
            });
        }
        if self.event_name.trim().is_empty() {
            return Err(RouterConfigError::EmptyEventName {
                field: "event_name",
            });
        }
        if self.goto_event_name.trim().is_empty() {
            return Err(RouterConfigError::EmptyEventName {
                field: "goto_event_name",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn ignore_unknown(mut self, value: bool) -> Self {
        self.config.ignore_unknown = value;
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.config.case_sensitive = value;
        self
    }

    pub fn max_redirects(mut self, value: usize) -> Self {
        self.config.max_redirects = value;
        self
    }

    pub fn event_name<S: Into<String>>(mut self, value: S) -> Self {
        self.config.event_name = value.into();
        self
    }

    pub fn goto_event_name<S: Into<String>>(mut self, value: S) -> Self {
        self.config.goto_event_name = value.into();
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("max_redirects must be at least 1 (got {provided})")]
    MaxRedirectsInvalid { provided: usize },
    #[error("{field} must not be empty")]
    EmptyEventName { field: &'static str },
}

pub type RouterOptions = RouterConfig;
pub type RouterOptionsBuilder = RouterConfigBuilder;
pub type RouterOptionsError = RouterConfigError;
