use bitflags::bitflags;
use url::Url;

use crate::path::Location;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AnchorFlags: u8 {
        const TARGET = 1 << 0;
        const DOWNLOAD = 1 << 1;
        const REL = 1 << 2;
        const NO_ROUTER = 1 << 3;
    }
}

impl AnchorFlags {
    pub fn from_attribute(name: &str) -> Option<Self> {
        match name {
            "target" => Some(Self::TARGET),
            "download" => Some(Self::DOWNLOAD),
            "rel" => Some(Self::REL),
            "no-router" => Some(Self::NO_ROUTER),
            _ => None,
        }
    }

    pub fn from_attributes<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter_map(Self::from_attribute)
            .fold(Self::empty(), |acc, flag| acc | flag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Anchor {
    pub href: String,
    pub raw_href: Option<String>,
    pub flags: AnchorFlags,
}

impl Anchor {
    pub fn new<S: Into<String>>(href: S) -> Self {
        let href = href.into();
        Self {
            raw_href: Some(href.clone()),
            href,
            flags: AnchorFlags::empty(),
        }
    }

    pub fn with_raw_href<S: Into<String>>(mut self, raw: S) -> Self {
        self.raw_href = Some(raw.into());
        self
    }

    pub fn with_flags(mut self, flags: AnchorFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Returns the path the router should navigate to for a click on `anchor`,
/// or `None` when the browser should handle the click itself.
pub fn intercept_target(anchor: Option<&Anchor>, current_url: &str) -> Option<String> {
    let anchor = anchor?;
    if anchor.href.is_empty() || !anchor.flags.is_empty() {
        return None;
    }
    if anchor
        .raw_href
        .as_deref()
        .is_some_and(|raw| raw.starts_with('#'))
    {
        return None;
    }

    let base = Url::parse(current_url).ok()?;
    let target = base.join(&anchor.href).ok()?;
    if target.origin() != base.origin() {
        tracing::trace!(href = %anchor.href, "cross-origin anchor left to the browser");
        return None;
    }

    Some(Location::from_url(&target).href())
}
