mod hook;
mod outcome;
mod pipeline;

pub use hook::{
    Hook, HookError, HookFuture, HookOutcome, HookResult, SharedHook, async_hook, hook_fn,
};
pub use outcome::NavigationOutcome;
pub use pipeline::Navigator;
