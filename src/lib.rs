pub mod matcher;
pub mod navigation;
pub mod path;
pub mod pattern;
pub mod platform;
pub mod router;
pub mod table;
pub mod types;

pub use matcher::MatchedRoute;
pub use navigation::{
    Hook, HookError, HookOutcome, NavigationOutcome, SharedHook, async_hook, hook_fn,
};
pub use path::{Location, parse_query};
pub use pattern::{PatternError, parse_pattern};
pub use platform::{
    Anchor, AnchorFlags, EventTarget, MemoryPlatform, NavigationEvent, Platform, PlatformEvent,
};
pub use router::{
    Router, RouterBuilder, RouterError, RouterOptions, RouterOptionsError, RouterResult,
};
pub use table::{CompiledRoute, RouteTable, RouteTemplate};
pub use types::{QueryMap, RouteParams, RouteView};
