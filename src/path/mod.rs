mod encode;
mod location;
mod query;

pub use encode::{decode_component, encode_component, encode_query};
pub use location::Location;
pub use query::parse_query;
