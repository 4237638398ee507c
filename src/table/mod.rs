mod generate;
mod route;
mod store;

pub use route::{CompiledRoute, RouteTemplate};
pub use store::RouteTable;
