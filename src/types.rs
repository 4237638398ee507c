use std::collections::HashMap;

pub type RouteParams = HashMap<String, String>;
pub type QueryMap = HashMap<String, String>;

pub trait RouteView: Clone + Send + Sync + 'static {}

impl<T> RouteView for T where T: Clone + Send + Sync + 'static {}
