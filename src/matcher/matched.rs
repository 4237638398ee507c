use std::sync::Arc;

use crate::path::Location;
use crate::table::CompiledRoute;
use crate::types::{QueryMap, RouteParams};

#[derive(Debug, Clone)]
pub struct MatchedRoute<V> {
    pub route: Arc<CompiledRoute<V>>,
    pub location: Location,
    pub params: RouteParams,
    pub query: QueryMap,
    pub view: Option<V>,
}

impl<V: Clone> MatchedRoute<V> {
    pub(crate) fn new(
        route: Arc<CompiledRoute<V>>,
        location: Location,
        params: RouteParams,
        query: QueryMap,
    ) -> Self {
        let view = route.view().cloned();
        Self {
            route,
            location,
            params,
            query,
            view,
        }
    }
}

impl<V> MatchedRoute<V> {
    pub fn name(&self) -> Option<&str> {
        self.route.name()
    }

    pub fn path(&self) -> &str {
        &self.location.path
    }

    pub fn hash(&self) -> &str {
        &self.location.hash
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn href(&self) -> String {
        self.location.href()
    }
}
