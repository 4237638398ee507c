mod click;
mod event;
mod memory;

pub use click::{Anchor, AnchorFlags, intercept_target};
pub use event::{HistoryState, NavigationEvent};
pub use memory::{EmitOutcome, HistoryEntry, MemoryPlatform};

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

pub const POPSTATE_EVENT: &str = "popstate";
pub const CLICK_EVENT: &str = "click";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Window,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    PopState,
    Click(Option<Anchor>),
    Custom { detail: Option<String> },
}

pub type ListenerFuture = BoxFuture<'static, ()>;

pub enum ListenerResponse {
    Ignored,
    /// The router took the event over: the default action must be prevented
    /// and the future driven to completion by the host.
    Handled(ListenerFuture),
}

impl ListenerResponse {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

impl fmt::Debug for ListenerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored => f.write_str("Ignored"),
            Self::Handled(_) => f.write_str("Handled"),
        }
    }
}

pub type Listener = Arc<dyn Fn(&PlatformEvent) -> ListenerResponse + Send + Sync>;

/// The host environment: location, history, event listeners and the event
/// target navigation events are dispatched to.
pub trait Platform<V>: Send + Sync {
    fn current_url(&self) -> String;

    fn push_history(&self, state: &HistoryState, title: &str, url: &str);

    fn add_event_listener(
        &self,
        target: EventTarget,
        event: &str,
        listener: Listener,
    ) -> ListenerId;

    fn remove_event_listener(&self, id: ListenerId);

    fn dispatch_event(&self, event: NavigationEvent<V>);
}
