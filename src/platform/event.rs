use serde::{Deserialize, Serialize};

use crate::matcher::MatchedRoute;
use crate::table::CompiledRoute;
use crate::types::{QueryMap, RouteParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub path: String,
}

impl HistoryState {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self { path: path.into() }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// The event announcing a committed navigation. It bubbles and cannot be
/// cancelled.
#[derive(Debug, Clone)]
pub struct NavigationEvent<V> {
    pub name: String,
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: MatchedRoute<V>,
}

impl<V> NavigationEvent<V> {
    pub fn new<S: Into<String>>(name: S, detail: MatchedRoute<V>) -> Self {
        Self {
            name: name.into(),
            bubbles: true,
            cancelable: false,
            detail,
        }
    }

    pub fn route(&self) -> &CompiledRoute<V> {
        &self.detail.route
    }

    pub fn path(&self) -> &str {
        self.detail.path()
    }

    pub fn params(&self) -> &RouteParams {
        &self.detail.params
    }

    pub fn query(&self) -> &QueryMap {
        &self.detail.query
    }
}
