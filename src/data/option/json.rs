//! JSON presentation of [`Option`].
//!
//! An option serializes as an object naming its type and variant:
//!
//! ```text
//! {"_id": "Option", "_tag": "Some", "value": 1}
//! {"_id": "Option", "_tag": "None"}
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Option, OptionError};
use crate::type_level::Tagged;

impl<A: Serialize> Serialize for Option<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Some(value) => {
                let mut state = serializer.serialize_struct(Self::ID, 3)?;
                state.serialize_field("_id", Self::ID)?;
                state.serialize_field("_tag", self.tag())?;
                state.serialize_field("value", value)?;
                state.end()
            }
            Self::None => {
                let mut state = serializer.serialize_struct(Self::ID, 2)?;
                state.serialize_field("_id", Self::ID)?;
                state.serialize_field("_tag", self.tag())?;
                state.end()
            }
        }
    }
}

impl<A: Serialize> Option<A> {
    /// Renders this option as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::Serialization`] if the payload cannot be
    /// represented as JSON (for example a map with non-string keys).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    /// use serde_json::json;
    ///
    /// assert_eq!(
    ///     Option::some(1).to_json().unwrap(),
    ///     json!({"_id": "Option", "_tag": "Some", "value": 1})
    /// );
    /// assert_eq!(
    ///     Option::<i32>::none().to_json().unwrap(),
    ///     json!({"_id": "Option", "_tag": "None"})
    /// );
    /// ```
    pub fn to_json(&self) -> Result<serde_json::Value, OptionError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Pretty-printed JSON with two-space indentation.
///
/// A payload JSON cannot represent is rendered as the serialization error
/// message in place of `value`, so formatting never fails.
impl<A: Serialize> fmt::Display for Option<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(rendered) => formatter.write_str(&rendered),
            Err(error) => {
                tracing::warn!(tag = self.tag(), %error, "failed to render Option as JSON");
                let fallback = serde_json::json!({
                    "_id": Self::ID,
                    "_tag": self.tag(),
                    "value": error.to_string(),
                });
                write!(formatter, "{fallback:#}")
            }
        }
    }
}
