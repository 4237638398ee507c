use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::matcher::captures_to_map;
use crate::table::CompiledRoute;
use crate::types::RouteParams;

pub type RouteMatch = (usize, RouteParams);

/// The combined alternation of every route's dispatch fragment.
///
/// `group_starts[i]` is the capture group wrapping route `i`. Custom
/// parameter patterns may open groups of their own, so the wrapper of route
/// `i` is not necessarily group `i + 1`.
#[derive(Debug, Clone, Default)]
pub struct DispatchMatcher {
    regex: Option<Regex>,
    group_starts: Vec<usize>,
}

impl DispatchMatcher {
    pub fn build<'a, I>(fragments: I, case_sensitive: bool) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut sources = Vec::new();
        let mut group_starts = Vec::new();
        let mut next_group = 1usize;

        for (fragment, groups) in fragments {
            group_starts.push(next_group);
            next_group += groups;
            sources.push(fragment);
        }

        if sources.is_empty() {
            return Ok(Self::default());
        }

        let regex = RegexBuilder::new(&sources.join("|"))
            .case_insensitive(!case_sensitive)
            .build()?;

        Ok(Self {
            regex: Some(regex),
            group_starts,
        })
    }

    pub fn source(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    pub fn find(&self, path: &str) -> Option<usize> {
        let regex = self.regex.as_ref()?;
        let captures = regex.captures(path)?;
        let whole = captures.get(0)?;
        if whole.start() != 0 || whole.end() != path.len() {
            return None;
        }

        self.group_starts
            .iter()
            .position(|&group| captures.get(group).is_some())
    }
}

#[tracing::instrument(
    level = "trace",
    skip(dispatch, routes),
    fields(routes = routes.len() as u64)
)]
pub fn find_route<V>(
    dispatch: &DispatchMatcher,
    routes: &[Arc<CompiledRoute<V>>],
    path: &str,
) -> Option<RouteMatch> {
    let index = dispatch.find(path)?;
    let route = routes.get(index)?;

    let params = match route.pattern() {
        Some(pattern) => captures_to_map(pattern, route.param_names(), path),
        None => RouteParams::new(),
    };

    tracing::trace!(index = index as u64, template = %route.path(), "route matched");
    Some((index, params))
}
