//! Construction-time configuration for [`SecretString`](crate::SecretString).
//!
//! Options never hold the secret itself, so they are safe to print and clone.

use std::borrow::Cow;

/// Mask used when none is configured, and after every deserialization.
pub const DEFAULT_MASK: &str = "********";

/// How a [`SecretString`](crate::SecretString) renders itself.
///
/// Build one with [`MaskOptions::new`] and the `with_*` methods:
///
/// ```rust
/// use secretstring::{MaskOptions, SecretString};
///
/// let options = MaskOptions::new()
///     .with_mask("???")
///     .with_reveal_on_serialize(true);
/// let pin = SecretString::with_options("0000", options);
///
/// assert_eq!(pin.to_string(), "???");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskOptions {
    /// Text substituted for the secret. Never empty.
    mask: Cow<'static, str>,
    /// Whether structured serialization emits the secret instead of the mask.
    reveal_on_serialize: bool,
}

impl MaskOptions {
    /// Default options: [`DEFAULT_MASK`] and masked serialization.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask: Cow::Borrowed(DEFAULT_MASK),
            reveal_on_serialize: false,
        }
    }

    /// Uses a custom mask.
    ///
    /// An empty mask falls back to [`DEFAULT_MASK`].
    #[must_use]
    pub fn with_mask<M>(mut self, mask: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let mask = mask.into();
        self.mask = if mask.is_empty() {
            Cow::Borrowed(DEFAULT_MASK)
        } else {
            mask
        };
        self
    }

    /// Controls whether structured serialization emits the secret (`true`) or
    /// the mask (`false`).
    #[must_use]
    pub fn with_reveal_on_serialize(mut self, reveal_on_serialize: bool) -> Self {
        self.reveal_on_serialize = reveal_on_serialize;
        self
    }

    /// Returns the configured mask.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Returns whether serialization emits the secret.
    pub fn reveals_on_serialize(&self) -> bool {
        self.reveal_on_serialize
    }

    pub(crate) fn into_parts(self) -> (Cow<'static, str>, bool) {
        (self.mask, self.reveal_on_serialize)
    }
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self::new()
    }
}
