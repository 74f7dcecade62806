use std::fmt;

/// Identifies a required field of an [`Item`](super::Item)
///
/// Carried by validation errors so callers can report which field was
/// rejected without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    /// The primary key
    Name,
    /// The free-form description
    Description,
}

impl ItemField {
    /// Returns the field name as it appears in JSON and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Description => "description",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
