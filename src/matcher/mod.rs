mod matched;
mod params;
pub mod resolver;

pub use matched::MatchedRoute;
pub(crate) use params::captures_to_map;
pub use resolver::{DispatchMatcher, RouteMatch, find_route};
