use regex::Regex;

use crate::path::decode_component;
use crate::pattern::param_group_name;
use crate::types::RouteParams;

/// Re-runs a route's named pattern against `path` and collects its
/// parameters. Every declared name is present; a group that did not take part
/// in the match yields `""`. Repeated names keep the last value.
pub(crate) fn captures_to_map(pattern: &Regex, names: &[String], path: &str) -> RouteParams {
    let mut map = RouteParams::with_capacity(names.len());
    let captures = pattern.captures(path);

    for (index, name) in names.iter().enumerate() {
        let value = captures
            .as_ref()
            .and_then(|caps| caps.name(&param_group_name(index)))
            .map(|m| decode_component(m.as_str()).into_owned())
            .unwrap_or_default();
        map.insert(name.clone(), value);
    }

    map
}
