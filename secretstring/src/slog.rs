//! `slog` integration for [`SecretString`].
//!
//! The logged field is always the mask, whatever `reveal_on_serialize` says:
//! that flag governs structured payloads, and a log line is not one.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::secret::SecretString;

impl SlogValue for SecretString {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.mask())
    }
}
