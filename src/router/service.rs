use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::matcher::MatchedRoute;
use crate::navigation::{NavigationOutcome, Navigator, SharedHook};
use crate::path::Location;
use crate::platform::{CLICK_EVENT, EventTarget, ListenerId, POPSTATE_EVENT, Platform};
use crate::router::listeners;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::table::{RouteTable, RouteTemplate};
use crate::types::{RouteParams, RouteView};

#[derive(Debug, Default)]
struct RouterState {
    listeners: Option<Vec<ListenerId>>,
}

pub struct Router<V> {
    navigator: Arc<Navigator<V>>,
    state: Mutex<RouterState>,
}

impl<V> fmt::Debug for Router<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("navigator", &self.navigator)
            .field("state", &*self.state.lock())
            .finish()
    }
}

impl<V: RouteView> Router<V> {
    pub fn builder<P>(platform: Arc<P>) -> RouterBuilder<V>
    where
        P: Platform<V> + 'static,
    {
        RouterBuilder::new(platform)
    }

    pub fn new<I>(
        templates: I,
        options: RouterOptions,
        platform: Arc<dyn Platform<V>>,
    ) -> RouterResult<Self>
    where
        I: IntoIterator<Item = RouteTemplate<V>>,
    {
        Self::with_hooks(templates, Vec::new(), options, platform)
    }

    fn with_hooks<I>(
        templates: I,
        hooks: Vec<SharedHook<V>>,
        options: RouterOptions,
        platform: Arc<dyn Platform<V>>,
    ) -> RouterResult<Self>
    where
        I: IntoIterator<Item = RouteTemplate<V>>,
    {
        options.validate()?;
        let table = RouteTable::build(templates, &options)?.with_global_hooks(hooks);
        let navigator = Navigator::new(Arc::new(table), platform, options);
        Ok(Self {
            navigator: Arc::new(navigator),
            state: Mutex::new(RouterState::default()),
        })
    }

    /// Subscribes the popstate, click and goto listeners, then resolves the
    /// current URL without writing history.
    #[tracing::instrument(level = "trace", skip_all)]
    pub async fn start(&self) -> RouterResult<NavigationOutcome<V>> {
        {
            let mut state = self.state.lock();
            if state.listeners.is_some() {
                return Err(RouterError::AlreadyStarted);
            }

            let platform = self.navigator.platform();
            let goto_event = &self.navigator.options().goto_event_name;
            let ids = vec![
                platform.add_event_listener(
                    EventTarget::Window,
                    POPSTATE_EVENT,
                    listeners::popstate(Arc::clone(&self.navigator)),
                ),
                platform.add_event_listener(
                    EventTarget::Document,
                    CLICK_EVENT,
                    listeners::click(Arc::clone(&self.navigator)),
                ),
                platform.add_event_listener(
                    EventTarget::Document,
                    goto_event,
                    listeners::goto(Arc::clone(&self.navigator)),
                ),
            ];
            tracing::debug!(listeners = ids.len() as u64, "router started");
            state.listeners = Some(ids);
        }

        let current = self.navigator.platform().current_url();
        self.navigator.navigate(&current, false).await
    }

    /// Removes the listeners added by `start`. Does nothing when stopped.
    pub fn stop(&self) {
        let Some(ids) = self.state.lock().listeners.take() else {
            return;
        };
        let platform = self.navigator.platform();
        for id in &ids {
            platform.remove_event_listener(*id);
        }
        tracing::debug!(listeners = ids.len() as u64, "router stopped");
    }

    pub fn is_started(&self) -> bool {
        self.state.lock().listeners.is_some()
    }

    pub async fn navigate(
        &self,
        target: &str,
        push_state: bool,
    ) -> RouterResult<NavigationOutcome<V>> {
        self.navigator.navigate(target, push_state).await
    }

    pub async fn navigate_to_named<K, Q>(
        &self,
        name: &str,
        params: &RouteParams,
        query: &[(K, Q)],
        push_state: bool,
    ) -> RouterResult<NavigationOutcome<V>>
    where
        K: AsRef<str>,
        Q: AsRef<str>,
    {
        let url = self.generate_url(name, params, query)?;
        self.navigator.navigate(&url, push_state).await
    }

    pub fn generate_url<K, Q>(
        &self,
        name: &str,
        params: &RouteParams,
        query: &[(K, Q)],
    ) -> RouterResult<String>
    where
        K: AsRef<str>,
        Q: AsRef<str>,
    {
        self.navigator.table().generate_url(name, params, query)
    }

    pub fn match_target(&self, target: &str) -> Option<MatchedRoute<V>> {
        self.navigator.table().match_location(&Location::parse(target))
    }

    pub fn table(&self) -> &RouteTable<V> {
        self.navigator.table()
    }

    pub fn options(&self) -> &RouterOptions {
        self.navigator.options()
    }
}

impl<V> Drop for Router<V> {
    fn drop(&mut self) {
        // registered listeners keep the navigator alive
        if let Some(ids) = self.state.get_mut().listeners.take() {
            let platform = self.navigator.platform();
            for id in ids {
                platform.remove_event_listener(id);
            }
        }
    }
}

pub struct RouterBuilder<V> {
    platform: Arc<dyn Platform<V>>,
    options: RouterOptions,
    templates: Vec<RouteTemplate<V>>,
    hooks: Vec<SharedHook<V>>,
}

impl<V: RouteView> RouterBuilder<V> {
    fn new<P>(platform: Arc<P>) -> Self
    where
        P: Platform<V> + 'static,
    {
        Self {
            platform,
            options: RouterOptions::default(),
            templates: Vec::new(),
            hooks: Vec::new(),
        }
    }

    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn route(mut self, template: RouteTemplate<V>) -> Self {
        self.templates.push(template);
        self
    }

    pub fn named<S: Into<String>>(mut self, name: S, template: RouteTemplate<V>) -> Self {
        self.templates.push(template.name(name));
        self
    }

    pub fn routes<I>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = RouteTemplate<V>>,
    {
        self.templates.extend(templates);
        self
    }

    pub fn hook(mut self, hook: SharedHook<V>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn build(self) -> RouterResult<Router<V>> {
        Router::with_hooks(self.templates, self.hooks, self.options, self.platform)
    }
}
