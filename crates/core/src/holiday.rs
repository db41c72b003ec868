use serde::{Deserialize, Serialize};

/// A single holiday record as provided by the snapshot or the remote API.
///
/// Records are plain values with no identity beyond their field tuple; they
/// are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Localized display name.
    pub name: String,
    /// Category string, e.g. `"national"`.
    #[serde(rename = "type", default = "default_holiday_type")]
    pub holiday_type: String,
}

/// Category assumed when the provider omits the `type` field.
fn default_holiday_type() -> String {
    "national".to_string()
}

impl Holiday {
    /// Creates a new holiday record.
    pub fn new(
        date: impl Into<String>,
        name: impl Into<String>,
        holiday_type: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
            holiday_type: holiday_type.into(),
        }
    }

    /// Creates a holiday record with the `"national"` category.
    pub fn national(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(date, name, default_holiday_type())
    }
}
