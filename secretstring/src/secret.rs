//! The masked string type.
//!
//! The secret lives in a private field. `Display` and `Debug` only ever see the
//! mask, and [`SecretString::reveal`] is the single accessor for the real value.
//! Do not add `Deref`, `AsRef<str>` or `Borrow<str>`: the secret must only leave
//! through an explicit `reveal()` call.

use std::{borrow::Cow, fmt};

use crate::options::{MaskOptions, DEFAULT_MASK};

/// A string that renders as a mask everywhere except [`SecretString::reveal`].
///
/// ```rust
/// use secretstring::SecretString;
///
/// let password = SecretString::new("my magic secret");
///
/// assert_eq!(password.to_string(), "********");
/// assert_eq!(format!("{password:?}"), "\"********\"");
/// assert_eq!(password.reveal(), "my magic secret");
/// ```
#[derive(Clone)]
pub struct SecretString {
    secret: String,
    mask: Cow<'static, str>,
    reveal_on_serialize: bool,
}

impl SecretString {
    /// Wraps `secret` using [`DEFAULT_MASK`] and masked serialization.
    ///
    /// Any string is accepted, including an empty one.
    #[must_use]
    pub fn new<S>(secret: S) -> Self
    where
        S: Into<String>,
    {
        Self::with_options(secret, MaskOptions::new())
    }

    /// Wraps `secret` using the given options.
    #[must_use]
    pub fn with_options<S>(secret: S, options: MaskOptions) -> Self
    where
        S: Into<String>,
    {
        let (mask, reveal_on_serialize) = options.into_parts();
        Self {
            secret: secret.into(),
            mask,
            reveal_on_serialize,
        }
    }

    /// Returns the real secret.
    ///
    /// This is the only way to read the value back. Call it at the point where
    /// the secret is actually consumed, never to build log or display output.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.secret
    }

    /// Returns the mask rendered in place of the secret.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Returns whether structured serialization emits the secret.
    pub fn reveals_on_serialize(&self) -> bool {
        self.reveal_on_serialize
    }

    /// The text handed to a structured serializer.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn encoded_str(&self) -> &str {
        if self.reveal_on_serialize {
            &self.secret
        } else {
            &self.mask
        }
    }

    /// Builds the value produced by deserialization: default options, new secret.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn decoded(secret: String) -> Self {
        Self {
            secret,
            mask: Cow::Borrowed(DEFAULT_MASK),
            reveal_on_serialize: false,
        }
    }
}

impl Default for SecretString {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<String> for SecretString {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for SecretString {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.mask)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.mask.as_ref(), f)
    }
}
