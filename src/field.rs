/// Stable field identifiers of the [`Range`](crate::Range) record.
///
/// Serializers key off these ids, never off field names or declaration
/// order, so the wire representation survives field reordering in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Min,
    Max,
}

impl Field {
    // Declared schema order, `min` before `max`.
    pub const DECLARED: [Field; 2] = [Field::Min, Field::Max];

    pub fn id(&self) -> i16 {
        match self {
            Self::Min => 1,
            Self::Max => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    pub fn from_id(id: i16) -> Option<Field> {
        match id {
            1 => Some(Field::Min),
            2 => Some(Field::Max),
            _ => None,
        }
    }
}
