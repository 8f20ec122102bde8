//! Structured serialization hooks for [`SecretString`].
//!
//! Serialization emits a single string scalar: the mask by default, or the
//! secret when the value was built with `reveal_on_serialize`.
//!
//! Deserialization treats any scalar as the new secret and always yields the
//! default configuration, since the wire format carries no trace of the options
//! that produced it. Scalars are read through `deserialize_any`, so a
//! self-describing format (JSON, YAML, TOML, ...) is required.
//!
//! With the `json` feature, serde_json runs with `arbitrary_precision` and hands
//! numbers over as their literal text, so `1.0` or a 30-digit integer stays
//! byte-for-byte what the payload contained.

use std::fmt;

use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::secret::SecretString;

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.encoded_str())
    }
}

/// Reads any scalar as the new secret, with default options.
///
/// Strings are taken verbatim, booleans and numbers as their text. `null`
/// becomes an empty secret, not the text `"null"`; use `Option<SecretString>`
/// to tell a missing value apart. Arrays and objects are rejected.
impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SecretVisitor)
    }
}

/// Coerces any scalar into the textual form used as the secret.
struct SecretVisitor;

impl<'de> Visitor<'de> for SecretVisitor {
    type Value = SecretString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or another scalar value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(v))
    }

    // `Unexpected::Bytes` renders as "byte array", never the payload.
    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        std::str::from_utf8(v)
            .map(|s| SecretString::decoded(s.to_owned()))
            .map_err(|_| E::invalid_value(Unexpected::Bytes(v), &self))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        String::from_utf8(v)
            .map(SecretString::decoded)
            .map_err(|err| E::invalid_value(Unexpected::Bytes(err.as_bytes()), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SecretString::decoded(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    // serde_json's `arbitrary_precision` numbers arrive as a one-entry map;
    // `Number` knows how to read it back, and rejects any other map.
    #[cfg(feature = "json")]
    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let number = serde_json::Number::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(SecretString::decoded(number.to_string()))
    }
}

#[cfg(feature = "json")]
pub use self::json::DecodeError;

#[cfg(feature = "json")]
mod json {
    use crate::secret::SecretString;

    /// Returned by [`SecretString::from_json`] when the input is not valid JSON
    /// or is not a scalar.
    #[derive(Debug, thiserror::Error)]
    #[error("failed to decode secret string: {0}")]
    pub struct DecodeError(#[from] serde_json::Error);

    impl DecodeError {
        /// Whether the input ended before a complete JSON value was read.
        pub fn is_eof(&self) -> bool {
            self.0.is_eof()
        }
    }

    impl SecretString {
        /// Encodes the value as a single JSON string token.
        ///
        /// Emits the secret when `reveal_on_serialize` is set, the mask
        /// otherwise. Standard JSON escaping applies to either.
        ///
        /// ```rust
        /// use secretstring::SecretString;
        ///
        /// assert_eq!(SecretString::new("hello").to_json(), "\"********\"");
        /// ```
        #[must_use]
        pub fn to_json(&self) -> String {
            serde_json::Value::from(self.encoded_str()).to_string()
        }

        /// Same as [`SecretString::to_json`], as bytes.
        #[must_use]
        pub fn to_json_vec(&self) -> Vec<u8> {
            self.to_json().into_bytes()
        }

        /// Decodes a single JSON scalar into a new value with default options.
        ///
        /// ```rust
        /// use secretstring::{SecretString, DEFAULT_MASK};
        ///
        /// let pin = SecretString::from_json(b"1234")?;
        /// assert_eq!(pin.reveal(), "1234");
        /// assert_eq!(pin.to_string(), DEFAULT_MASK);
        /// # Ok::<(), secretstring::DecodeError>(())
        /// ```
        pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
            Ok(serde_json::from_slice(bytes)?)
        }
    }
}
