/// The value shown in place of any field a record is missing.
pub const MISSING_FIELD: &str = "N/A";

/// A user record from the users endpoint.
///
/// The endpoint makes no guarantees about record shape,
/// so every field is optional.
/// A field whose value is not a string decodes as absent,
/// the same as one that is missing entirely.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct User {
    /// The full name
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    /// The login handle
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,

    /// The contact email
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,

    /// The postal address
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<Address>,
}

impl User {
    /// Get the city from the nested address, if the record carries one.
    ///
    /// This is `Some` only for a city that was a real json string,
    /// never for the [`MISSING_FIELD`] substitute.
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref()?.city.as_deref()
    }

    /// The name for display, substituting [`MISSING_FIELD`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// The username for display, substituting [`MISSING_FIELD`].
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// The email for display, substituting [`MISSING_FIELD`].
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// The city for display, substituting [`MISSING_FIELD`].
    pub fn display_city(&self) -> &str {
        self.city().unwrap_or(MISSING_FIELD)
    }
}

/// The address part of a user record.
///
/// Only the city is of interest; other keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Address {
    /// The city name
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
}

/// Decode a value that may be missing, null, or of the wrong type as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value: serde_json::Value = serde::Deserialize::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
