use crate::matcher::MatchedRoute;

#[derive(Debug, Clone)]
pub enum NavigationOutcome<V> {
    Completed(MatchedRoute<V>),
    Cancelled,
    NotFound,
}

impl<V> NavigationOutcome<V> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn matched(&self) -> Option<&MatchedRoute<V>> {
        match self {
            Self::Completed(matched) => Some(matched),
            _ => None,
        }
    }

    pub fn into_matched(self) -> Option<MatchedRoute<V>> {
        match self {
            Self::Completed(matched) => Some(matched),
            _ => None,
        }
    }
}
