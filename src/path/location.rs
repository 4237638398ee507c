use memchr::memchr;

/// A navigation target split into path, query (without `?`) and hash
/// (without `#`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub hash: String,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        if let Ok(url) = ::url::Url::parse(target)
            && !url.cannot_be_a_base()
        {
            return Self::from_url(&url);
        }

        let (before_hash, hash) = match memchr(b'#', target.as_bytes()) {
            Some(idx) => (&target[..idx], &target[idx + 1..]),
            None => (target, ""),
        };
        let (path, query) = match memchr(b'?', before_hash.as_bytes()) {
            Some(idx) => (&before_hash[..idx], &before_hash[idx + 1..]),
            None => (before_hash, ""),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            path,
            query: query.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn from_url(url: &::url::Url) -> Self {
        Self {
            path: url.path().to_string(),
            query: url.query().unwrap_or_default().to_string(),
            hash: url.fragment().unwrap_or_default().to_string(),
        }
    }

    pub fn href(&self) -> String {
        let mut href =
            String::with_capacity(self.path.len() + self.query.len() + self.hash.len() + 2);
        href.push_str(&self.path);
        if !self.query.is_empty() {
            href.push('?');
            href.push_str(&self.query);
        }
        if !self.hash.is_empty() {
            href.push('#');
            href.push_str(&self.hash);
        }
        href
    }
}
