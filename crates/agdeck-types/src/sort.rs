use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient a comparison of two defined values
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Current row ordering of a table.
///
/// A key without a direction (or the reverse) cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        key: String,
        direction: SortDirection,
    },
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        SortState::Sorted {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        SortState::Sorted {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { key, .. } => Some(key),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Direction applied to `key`, if that column is the sort key
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted { key: k, direction } if k == key => Some(*direction),
            _ => None,
        }
    }

    pub fn is_sorted(&self) -> bool {
        matches!(self, SortState::Sorted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Equal),
            Ordering::Equal
        );
    }

    #[test]
    fn test_accessors() {
        let state = SortState::descending("cost");
        assert_eq!(state.key(), Some("cost"));
        assert_eq!(state.direction(), Some(SortDirection::Descending));
        assert_eq!(state.direction_for("cost"), Some(SortDirection::Descending));
        assert_eq!(state.direction_for("agent"), None);

        assert_eq!(SortState::Unsorted.key(), None);
        assert_eq!(SortState::Unsorted.direction(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(SortState::ascending("tokens")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"state": "sorted", "key": "tokens", "direction": "ascending"})
        );

        let json = serde_json::to_value(SortState::Unsorted).unwrap();
        assert_eq!(json, serde_json::json!({"state": "unsorted"}));
    }
}
