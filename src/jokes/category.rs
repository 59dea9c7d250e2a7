use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Joke-topic filter sent to the API as a path segment. The set is fixed by
/// the API; `Display` renders the exact segment it expects.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Category {
    Any,
    #[default]
    Programming,
    Misc,
    Pun,
    Spooky,
    Christmas,
}

impl Category {
    /// The category after this one, wrapping at the end of the set.
    pub fn next(self) -> Self {
        let mut iter = Self::iter().cycle();
        iter.find(|c| *c == self);
        iter.next().unwrap_or_default()
    }

    /// The category before this one, wrapping at the start of the set.
    pub fn prev(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let i = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_category() {
        assert_eq!(Category::default(), Category::Programming);
    }

    #[test]
    fn test_display_matches_api_path_segment() {
        assert_eq!(Category::Any.to_string(), "Any");
        assert_eq!(Category::Programming.to_string(), "Programming");
        assert_eq!(Category::Christmas.to_string(), "Christmas");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Category::Any.next(), Category::Programming);
        assert_eq!(Category::Christmas.next(), Category::Any);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(Category::Programming.prev(), Category::Any);
        assert_eq!(Category::Any.prev(), Category::Christmas);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for category in Category::iter() {
            assert_eq!(category.next().prev(), category);
        }
    }
}
