pub mod field;
pub mod wire;

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::field::Field;

/// Schema-derived record with two required i32 fields, `min` (field id 1)
/// and `max` (field id 2). Immutable once constructed; use [`Builder`] for
/// staged construction.
///
/// The type itself does not enforce `min <= max`.
#[derive(Getters, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    #[getter(copy)]
    min: i32,
    #[getter(copy)]
    max: i32,
}

impl Range {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Range {{")?;
        for (idx, field) in Field::DECLARED.iter().enumerate() {
            let value = match field {
                Field::Min => self.min,
                Field::Max => self.max,
            };
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", field.name(), value)?;
        }
        write!(f, "}}")
    }
}

/// Mutable staging companion of [`Range`]. Fields left unset stay at zero;
/// no validation happens on [`build`](Builder::build).
#[derive(Setters, Debug, Clone)]
pub struct Builder {
    min: i32,
    max: i32,
}

impl Builder {
    pub fn new() -> Self {
        Self { min: 0, max: 0 }
    }

    pub fn from_range(range: &Range) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }

    pub fn build(self) -> Range {
        Range {
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Builder, Range};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(range: &Range) -> u64 {
        let mut hasher = DefaultHasher::new();
        range.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn ut_range_new() {
        let range = Range::new(5, 10);
        assert_eq!(range.min(), 5);
        assert_eq!(range.max(), 10);

        let range = Range::new(-3, 3);
        assert_eq!(range.min(), -3);
        assert_eq!(range.max(), 3);
    }

    #[test]
    fn ut_range_eq() {
        assert_eq!(Range::new(1, 2), Range::new(1, 2));
        assert_ne!(Range::new(1, 2), Range::new(1, 3));
        assert_ne!(Range::new(1, 2), Range::new(0, 2));
        assert_ne!(Range::new(1, 2), Range::new(2, 1));
    }

    #[test]
    fn ut_range_hash() {
        let range = Range::new(7, 42);
        assert_eq!(hash_of(&range), hash_of(&range));
        assert_eq!(hash_of(&Range::new(7, 42)), hash_of(&range));
        assert_ne!(hash_of(&Range::new(42, 7)), hash_of(&range));
    }

    #[test]
    fn ut_range_display() {
        let rendered = Range::new(5, 10).to_string();
        assert_eq!(rendered, "Range {min=5, max=10}");
        assert!(rendered.find("min=5").unwrap() < rendered.find("max=10").unwrap());
    }

    #[test]
    fn ut_range_serde() {
        let range = Range::new(5, 10);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"min":5,"max":10}"#);
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), range);

        // Both fields are required, a partial payload must be rejected.
        assert!(serde_json::from_str::<Range>(r#"{"min":5}"#).is_err());
        assert!(serde_json::from_str::<Range>(r#"{"max":10}"#).is_err());
    }

    #[test]
    fn ut_builder_default() {
        assert_eq!(Builder::new().build(), Range::new(0, 0));
        assert_eq!(Builder::default().build(), Range::new(0, 0));
    }

    #[test]
    fn ut_builder_chaining() {
        assert_eq!(Builder::new().min(1).max(2).build(), Range::new(1, 2));
        assert_eq!(Builder::new().max(2).min(1).build(), Range::new(1, 2));
        assert_eq!(Builder::new().min(1).build(), Range::new(1, 0));
    }

    #[test]
    fn ut_builder_from_range() {
        let range = Range::new(-8, 15);
        assert_eq!(Builder::from_range(&range).build(), range);
        assert_eq!(
            Builder::from_range(&range).max(20).build(),
            Range::new(-8, 20)
        );
    }
}
