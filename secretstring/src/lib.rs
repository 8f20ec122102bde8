//! A string that keeps its secret out of logs, debug output and serialized payloads.
//!
//! [`SecretString`] stores a sensitive value (password, token, PIN) next to a
//! mask. Every generic textual path renders the mask:
//! - `Display` / `to_string()`
//! - `Debug`, including `{:#?}` on a containing struct
//! - `slog::Value` (behind the `slog` feature)
//!
//! The real value is only reachable through [`SecretString::reveal`], or through
//! structured serialization when the value was built with
//! [`MaskOptions::with_reveal_on_serialize`] set to `true`.
//!
//! Deserialization accepts any scalar as the new secret and always resets the
//! configuration to the safe defaults: [`DEFAULT_MASK`] and masked
//! serialization.
//!
//! What it does not do:
//! - encrypt or zero the secret in memory
//! - perform I/O or logging
//!
//! Features:
//! - `serde`: `Serialize` / `Deserialize` implementations
//! - `json` (default): `to_json` / `from_json` helpers and [`DecodeError`]
//! - `slog`: a `slog::Value` implementation that always logs the mask

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn
)]
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod options;
mod secret;

#[cfg(feature = "serde")]
mod encoding;
#[cfg(feature = "slog")]
mod slog;

pub use options::{MaskOptions, DEFAULT_MASK};
pub use secret::SecretString;

#[cfg(feature = "json")]
pub use encoding::DecodeError;
