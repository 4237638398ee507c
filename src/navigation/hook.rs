use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture};

use crate::matcher::MatchedRoute;

pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HookResult<V> = Result<HookOutcome<V>, HookError>;
pub type HookFuture<'a, V> = BoxFuture<'a, HookResult<V>>;
pub type SharedHook<V> = Arc<dyn Hook<V>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome<V> {
    /// Stop here: nothing is written to history and no event fires.
    Abort,
    RedirectTo(String),
    Continue,
    ReplaceView(V),
}

impl<V> HookOutcome<V> {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::RedirectTo(path.into())
    }

    pub fn from_bool(proceed: bool) -> Self {
        if proceed { Self::Continue } else { Self::Abort }
    }
}

pub trait Hook<V>: Send + Sync {
    fn invoke<'a>(&'a self, matched: &'a MatchedRoute<V>) -> HookFuture<'a, V>;
}

impl<V> fmt::Debug for dyn Hook<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook")
    }
}

struct SyncHook<F>(F);

impl<V, F> Hook<V> for SyncHook<F>
where
    V: Send + Sync + 'static,
    F: Fn(&MatchedRoute<V>) -> HookResult<V> + Send + Sync,
{
    fn invoke<'a>(&'a self, matched: &'a MatchedRoute<V>) -> HookFuture<'a, V> {
        Box::pin(future::ready((self.0)(matched)))
    }
}

struct AsyncHook<F>(F);

impl<V, F, Fut> Hook<V> for AsyncHook<F>
where
    V: Send + Sync + 'static,
    F: Fn(&MatchedRoute<V>) -> Fut + Send + Sync,
    Fut: Future<Output = HookResult<V>> + Send + 'static,
{
    fn invoke<'a>(&'a self, matched: &'a MatchedRoute<V>) -> HookFuture<'a, V> {
        Box::pin((self.0)(matched))
    }
}

pub fn hook_fn<V, F>(f: F) -> SharedHook<V>
where
    V: Send + Sync + 'static,
    F: Fn(&MatchedRoute<V>) -> HookResult<V> + Send + Sync + 'static,
{
    Arc::new(SyncHook(f))
}

/// Wraps a closure returning a future as a hook. The future must own what it
/// needs from the matched route.
pub fn async_hook<V, F, Fut>(f: F) -> SharedHook<V>
where
    V: Send + Sync + 'static,
    F: Fn(&MatchedRoute<V>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HookResult<V>> + Send + 'static,
{
    Arc::new(AsyncHook(f))
}
