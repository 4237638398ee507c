use std::sync::Arc;

use futures::FutureExt;

use crate::navigation::{NavigationOutcome, Navigator};
use crate::platform::{Listener, ListenerResponse, PlatformEvent, intercept_target};
use crate::types::RouteView;

fn listener<F>(f: F) -> Listener
where
    F: Fn(&PlatformEvent) -> ListenerResponse + Send + Sync + 'static,
{
    Arc::new(f)
}

pub(crate) fn popstate<V: RouteView>(navigator: Arc<Navigator<V>>) -> Listener {
    listener(move |_event: &PlatformEvent| {
        let target = navigator.platform().current_url();
        spawn_navigation(Arc::clone(&navigator), target, false)
    })
}

pub(crate) fn click<V: RouteView>(navigator: Arc<Navigator<V>>) -> Listener {
    listener(move |event: &PlatformEvent| {
        let PlatformEvent::Click(anchor) = event else {
            return ListenerResponse::Ignored;
        };
        let current = navigator.platform().current_url();
        match intercept_target(anchor.as_ref(), &current) {
            Some(target) => spawn_navigation(Arc::clone(&navigator), target, true),
            None => ListenerResponse::Ignored,
        }
    })
}

pub(crate) fn goto<V: RouteView>(navigator: Arc<Navigator<V>>) -> Listener {
    listener(move |event: &PlatformEvent| match event {
        PlatformEvent::Custom {
            detail: Some(target),
        } => spawn_navigation(Arc::clone(&navigator), target.clone(), true),
        _ => ListenerResponse::Ignored,
    })
}

fn spawn_navigation<V: RouteView>(
    navigator: Arc<Navigator<V>>,
    target: String,
    push_state: bool,
) -> ListenerResponse {
    let fut = async move {
        match navigator.navigate(&target, push_state).await {
            Ok(NavigationOutcome::NotFound) => {
                tracing::warn!(path = %target, "event navigation found no route");
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!(path = %target, error = %err, "event navigation failed");
            }
        }
    };
    ListenerResponse::Handled(fut.boxed())
}
