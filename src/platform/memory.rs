use futures::future;
use parking_lot::Mutex;
use url::Url;

use super::{
    EventTarget, HistoryState, Listener, ListenerFuture, ListenerId, ListenerResponse,
    NavigationEvent, Platform, PlatformEvent, POPSTATE_EVENT,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub state: serde_json::Value,
    pub title: String,
    pub url: String,
}

#[must_use]
pub struct EmitOutcome {
    pub prevented: bool,
    pending: Vec<ListenerFuture>,
}

impl EmitOutcome {
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub async fn settle(self) -> bool {
        future::join_all(self.pending).await;
        self.prevented
    }
}

struct Registration {
    id: ListenerId,
    target: EventTarget,
    event: String,
    listener: Listener,
}

struct MemoryState<V> {
    url: Url,
    stack: Vec<String>,
    pushes: Vec<HistoryEntry>,
    events: Vec<NavigationEvent<V>>,
    listeners: Vec<Registration>,
    next_id: u64,
}

/// A headless platform: location and history live in memory, events are
/// recorded instead of dispatched to a document.
pub struct MemoryPlatform<V> {
    state: Mutex<MemoryState<V>>,
}

impl<V> MemoryPlatform<V> {
    pub fn new(url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(url)?;
        let stack = vec![url.to_string()];
        Ok(Self {
            state: Mutex::new(MemoryState {
                url,
                stack,
                pushes: Vec::new(),
                events: Vec::new(),
                listeners: Vec::new(),
                next_id: 0,
            }),
        })
    }

    pub fn set_location(&self, href: &str) -> Result<(), url::ParseError> {
        let mut state = self.state.lock();
        state.url = state.url.join(href)?;
        Ok(())
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.lock().pushes.clone()
    }

    pub fn history_len(&self) -> usize {
        self.state.lock().stack.len()
    }

    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }

    pub fn events(&self) -> Vec<NavigationEvent<V>>
    where
        V: Clone,
    {
        self.state.lock().events.clone()
    }

    pub fn event_count(&self) -> usize {
        self.state.lock().events.len()
    }

    /// Delivers `event` to every listener registered for `target` and
    /// `name`, in registration order.
    pub fn emit(&self, target: EventTarget, name: &str, event: PlatformEvent) -> EmitOutcome {
        // listeners call back into the platform, so they run unlocked
        let listeners: Vec<Listener> = {
            let state = self.state.lock();
            state
                .listeners
                .iter()
                .filter(|reg| reg.target == target && reg.event == name)
                .map(|reg| reg.listener.clone())
                .collect()
        };

        let mut outcome = EmitOutcome {
            prevented: false,
            pending: Vec::new(),
        };
        for listener in listeners {
            if let ListenerResponse::Handled(fut) = listener(&event) {
                outcome.prevented = true;
                outcome.pending.push(fut);
            }
        }
        outcome
    }

    pub fn back(&self) -> EmitOutcome {
        let moved = {
            let mut state = self.state.lock();
            if state.stack.len() > 1 {
                state.stack.pop();
                let previous = state.stack.last().cloned().unwrap_or_default();
                match Url::parse(&previous) {
                    Ok(url) => {
                        state.url = url;
                        true
                    }
                    Err(_) => false,
                }
            } else {
                false
            }
        };

        if !moved {
            return EmitOutcome {
                prevented: false,
                pending: Vec::new(),
            };
        }
        self.emit(EventTarget::Window, POPSTATE_EVENT, PlatformEvent::PopState)
    }
}

impl<V> Platform<V> for MemoryPlatform<V>
where
    V: Send + Sync,
{
    fn current_url(&self) -> String {
        self.state.lock().url.to_string()
    }

    fn push_history(&self, state: &HistoryState, title: &str, url: &str) {
        let mut inner = self.state.lock();
        match inner.url.join(url) {
            Ok(next) => {
                inner.stack.push(next.to_string());
                inner.url = next;
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "history entry has an unresolvable url");
            }
        }
        let value = state.to_value().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "history state is not serializable");
            serde_json::Value::Null
        });
        inner.pushes.push(HistoryEntry {
            state: value,
            title: title.to_string(),
            url: url.to_string(),
        });
    }

    fn add_event_listener(
        &self,
        target: EventTarget,
        event: &str,
        listener: Listener,
    ) -> ListenerId {
        let mut state = self.state.lock();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.listeners.push(Registration {
            id,
            target,
            event: event.to_string(),
            listener,
        });
        id
    }

    fn remove_event_listener(&self, id: ListenerId) {
        self.state.lock().listeners.retain(|reg| reg.id != id);
    }

    fn dispatch_event(&self, event: NavigationEvent<V>) {
        tracing::trace!(name = %event.name, path = %event.path(), "navigation event dispatched");
        self.state.lock().events.push(event);
    }
}
