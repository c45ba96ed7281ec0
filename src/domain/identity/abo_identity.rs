//! Amway Business Owner identity record.
//!
//! Decoding is two-tier:
//!
//! - a field that is missing, `null`, or not a string becomes [`NO_DATA`];
//! - input that is not a mapping at all fails the whole decode.
//!
//! # Example
//!
//! ```
//! use common_interactions::domain::identity::{AmwayAboIdentity, NO_DATA};
//!
//! let identity = AmwayAboIdentity::from_json_str(
//!     r#"{"aboId":"A1","partyId":"P1","name":"Jane","registrationDate":"2021-01-01"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(identity.abo_id(), "A1");
//! assert_eq!(identity.abo_number(), NO_DATA);
//! ```

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Placeholder for any identity field that could not be decoded.
pub const NO_DATA: &str = "no data";

/// Raised when the input is not a mapping or is not valid JSON at all.
#[derive(Debug, Error)]
#[error("ABO identity is not a decodable mapping: {0}")]
pub struct IdentityDecodeError(#[from] serde_json::Error);

/// Identity of the signed-in Amway Business Owner.
///
/// Immutable once built. Serializes with camelCase keys (`aboId`,
/// `aboNumber`, `partyId`, `accessToken`, `name`, `registrationDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmwayAboIdentity {
    abo_id: String,
    abo_number: String,
    party_id: String,
    access_token: String,
    name: String,
    registration_date: String,
}

impl AmwayAboIdentity {
    /// Key under which hosts store or pass the identity.
    pub const IDENTITY_KEY: &'static str = "abo";

    /// Creates an identity from known values.
    pub fn new(
        abo_id: impl Into<String>,
        abo_number: impl Into<String>,
        party_id: impl Into<String>,
        access_token: impl Into<String>,
        name: impl Into<String>,
        registration_date: impl Into<String>,
    ) -> Self {
        Self {
            abo_id: abo_id.into(),
            abo_number: abo_number.into(),
            party_id: party_id.into(),
            access_token: access_token.into(),
            name: name.into(),
            registration_date: registration_date.into(),
        }
    }

    /// Decodes an identity from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, IdentityDecodeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decodes an identity from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, IdentityDecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn abo_id(&self) -> &str {
        &self.abo_id
    }

    pub fn abo_number(&self) -> &str {
        &self.abo_number
    }

    pub fn party_id(&self) -> &str {
        &self.party_id
    }

    /// Session token captured alongside the identity.
    #[deprecated(note = "Use AmwayAuthentication for authenticated session states and tokens.")]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registration_date(&self) -> &str {
        &self.registration_date
    }

    /// Returns true if any field fell back to [`NO_DATA`] while decoding.
    pub fn has_missing_fields(&self) -> bool {
        [
            &self.abo_id,
            &self.abo_number,
            &self.party_id,
            &self.access_token,
            &self.name,
            &self.registration_date,
        ]
        .iter()
        .any(|field| field.as_str() == NO_DATA)
    }
}

/// Takes a string field out of the mapping, substituting [`NO_DATA`].
fn lenient_field(fields: &mut Map<String, Value>, key: &'static str) -> String {
    match fields.remove(key) {
        Some(Value::String(value)) => value,
        Some(other) => {
            tracing::debug!(field = key, found = %other, "identity field is not a string, using sentinel");
            NO_DATA.to_string()
        }
        None => {
            tracing::debug!(field = key, "identity field missing, using sentinel");
            NO_DATA.to_string()
        }
    }
}

impl<'de> Deserialize<'de> for AmwayAboIdentity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only a mapping is accepted here; sequences and scalars are
        // structural errors rather than an all-sentinel record.
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        Ok(Self {
            abo_id: lenient_field(&mut fields, "aboId"),
            abo_number: lenient_field(&mut fields, "aboNumber"),
            party_id: lenient_field(&mut fields, "partyId"),
            access_token: lenient_field(&mut fields, "accessToken"),
            name: lenient_field(&mut fields, "name"),
            registration_date: lenient_field(&mut fields, "registrationDate"),
        })
    }
}
