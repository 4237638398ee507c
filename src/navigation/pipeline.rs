use std::fmt;
use std::sync::Arc;

use crate::matcher::MatchedRoute;
use crate::navigation::{HookOutcome, NavigationOutcome};
use crate::path::Location;
use crate::platform::{HistoryState, NavigationEvent, Platform};
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::table::RouteTable;
use crate::types::RouteView;

/// Runs navigations against a route table and commits them to a platform.
pub struct Navigator<V> {
    table: Arc<RouteTable<V>>,
    platform: Arc<dyn Platform<V>>,
    options: RouterOptions,
}

impl<V> fmt::Debug for Navigator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.table.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<V> Navigator<V> {
    pub fn new(
        table: Arc<RouteTable<V>>,
        platform: Arc<dyn Platform<V>>,
        options: RouterOptions,
    ) -> Self {
        Self {
            table,
            platform,
            options,
        }
    }

    pub fn table(&self) -> &Arc<RouteTable<V>> {
        &self.table
    }

    pub fn platform(&self) -> &Arc<dyn Platform<V>> {
        &self.platform
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }
}

impl<V: RouteView> Navigator<V> {
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(path = %target, push_state = push_state)
    )]
    pub async fn navigate(
        &self,
        target: &str,
        push_state: bool,
    ) -> RouterResult<NavigationOutcome<V>> {
        let mut current = target.to_string();
        let mut depth = 0usize;

        'resolve: loop {
            let location = Location::parse(&current);
            let Some(mut matched) = self.table.match_location(&location) else {
                tracing::debug!(path = %location.path, "no route matched");
                return Ok(NavigationOutcome::NotFound);
            };

            if let Some(redirect) = matched.route.redirect() {
                current = self.next_hop(target, &mut depth, redirect)?;
                continue 'resolve;
            }

            let route = Arc::clone(&matched.route);
            let steps = route
                .hooks()
                .iter()
                .chain(self.table.global_hooks())
                .chain(route.handler());

            for (step, hook) in steps.enumerate() {
                tracing::trace!(step = step as u64, route = %route.path(), "running hook");
                let outcome = hook.invoke(&matched).await.map_err(RouterError::Hook)?;
                match outcome {
                    HookOutcome::Continue => {}
                    HookOutcome::ReplaceView(view) => matched.view = Some(view),
                    HookOutcome::Abort => {
                        tracing::debug!(
                            path = %matched.path(),
                            step = step as u64,
                            "navigation aborted"
                        );
                        return Ok(NavigationOutcome::Cancelled);
                    }
                    HookOutcome::RedirectTo(next) => {
                        current = self.next_hop(target, &mut depth, &next)?;
                        continue 'resolve;
                    }
                }
            }

            self.commit(&matched, push_state);
            return Ok(NavigationOutcome::Completed(matched));
        }
    }

    fn next_hop(&self, target: &str, depth: &mut usize, next: &str) -> RouterResult<String> {
        if *depth >= self.options.max_redirects {
            return Err(RouterError::RedirectLoop {
                path: target.to_string(),
                depth: *depth,
            });
        }
        *depth += 1;
        tracing::debug!(to = %next, depth = *depth as u64, "redirecting");
        Ok(next.to_string())
    }

    fn commit(&self, matched: &MatchedRoute<V>, push_state: bool) {
        let href = matched.href();
        if push_state {
            self.platform
                .push_history(&HistoryState::new(matched.path()), "", &href);
        }
        self.platform.dispatch_event(NavigationEvent::new(
            self.options.event_name.clone(),
            matched.clone(),
        ));
        tracing::debug!(
            href = %href,
            route = %matched.route.path(),
            push_state,
            "navigation committed"
        );
    }
}
