use std::str::FromStr;

use crate::constants::ALL_SENTINEL;

/// A filter dropdown value: either the "all" sentinel or one concrete choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// `true` for `All`, otherwise compares the chosen value with `value`
    pub fn matches<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parses dropdown input; blank text and the sentinel (any case) mean `All`
    pub fn parse(input: &str) -> Result<Self, T::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            Ok(Selection::All)
        } else {
            trimmed.parse().map(Selection::Only)
        }
    }
}

impl Selection<String> {
    /// Free-text variant of [`Selection::parse`], which cannot fail for strings
    pub fn from_label(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            Selection::All
        } else {
            Selection::Only(trimmed.to_string())
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Selection::Only(value),
            None => Selection::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_all_matches_everything() {
        let selection: Selection<String> = Selection::All;
        assert!(selection.matches("anything"));
        assert!(selection.is_all());
    }

    #[test]
    fn test_only_matches_equal_values() {
        let selection = Selection::Only("Q3 2024".to_string());
        assert!(selection.matches("Q3 2024"));
        assert!(!selection.matches("Q4 2024"));
    }

    #[test]
    fn test_parse_sentinel_in_any_case() {
        assert_eq!(Selection::<Sentiment>::parse("all").unwrap(), Selection::All);
        assert_eq!(Selection::<Sentiment>::parse("All").unwrap(), Selection::All);
        assert_eq!(Selection::<Sentiment>::parse("").unwrap(), Selection::All);
        assert_eq!(
            Selection::<Sentiment>::parse("negative").unwrap(),
            Selection::Only(Sentiment::Negative)
        );
        assert!(Selection::<Sentiment>::parse("angry").is_err());
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Selection::from_label("All"), Selection::All);
        assert_eq!(
            Selection::from_label(" Q4 2024 "),
            Selection::Only("Q4 2024".to_string())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Selection::from(Some(3)), Selection::Only(3));
        assert_eq!(Selection::<i32>::from(None), Selection::All);
    }
}
