use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;

use crate::matcher::{DispatchMatcher, MatchedRoute, find_route};
use crate::navigation::SharedHook;
use crate::path::{Location, parse_query};
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::table::{CompiledRoute, RouteTemplate};
use crate::types::{RouteParams, RouteView};

/// Insertion order is the tie-break: the first matching route wins.
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<Arc<CompiledRoute<V>>>,
    names: FastHashMap<String, usize>,
    dispatch: DispatchMatcher,
    global_hooks: Vec<SharedHook<V>>,
}

impl<V: RouteView> RouteTable<V> {
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(case_sensitive = options.case_sensitive)
    )]
    pub fn build<I>(templates: I, options: &RouterOptions) -> RouterResult<Self>
    where
        I: IntoIterator<Item = RouteTemplate<V>>,
    {
        let mut routes = Vec::new();
        let mut names = FastHashMap::new();

        for template in templates {
            if let Some(name) = template.name.clone() {
                if names.contains_key(&name) {
                    return Err(RouterError::DuplicateRouteName { name });
                }
                names.insert(name, routes.len());
            }
            let route = CompiledRoute::compile(template, options.case_sensitive)?;
            routes.push(Arc::new(route));
        }

        if routes.is_empty() && !options.ignore_unknown {
            return Err(RouterError::NoRoutes);
        }

        let dispatch = DispatchMatcher::build(
            routes
                .iter()
                .map(|route| (route.dispatch_fragment(), route.dispatch_groups())),
            options.case_sensitive,
        )?;

        tracing::debug!(
            routes = routes.len() as u64,
            named = names.len() as u64,
            "route table built"
        );

        Ok(Self {
            routes,
            names,
            dispatch,
            global_hooks: Vec::new(),
        })
    }

    pub fn with_global_hooks(mut self, hooks: Vec<SharedHook<V>>) -> Self {
        self.global_hooks = hooks;
        self
    }

    pub fn match_path(&self, path: &str) -> Option<(Arc<CompiledRoute<V>>, RouteParams)> {
        let (index, params) = find_route(&self.dispatch, &self.routes, path)?;
        Some((Arc::clone(&self.routes[index]), params))
    }

    pub fn match_location(&self, location: &Location) -> Option<MatchedRoute<V>> {
        let (route, params) = self.match_path(&location.path)?;
        let query = parse_query(&location.query);
        Some(MatchedRoute::new(route, location.clone(), params, query))
    }
}

impl<V> RouteTable<V> {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Arc<CompiledRoute<V>>] {
        &self.routes
    }

    pub fn get(&self, name: &str) -> Option<&Arc<CompiledRoute<V>>> {
        self.names.get(name).map(|&index| &self.routes[index])
    }

    pub fn global_hooks(&self) -> &[SharedHook<V>] {
        &self.global_hooks
    }

    pub fn has_wildcard(&self) -> bool {
        self.routes.iter().any(|route| route.is_wildcard())
    }

    pub fn dispatch_source(&self) -> Option<&str> {
        self.dispatch.source()
    }
}
