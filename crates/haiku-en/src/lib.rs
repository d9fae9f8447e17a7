//! English haiku validation rules.
//!
//! - [`syllable`] -- rule-based syllable estimation for a single line
//! - [`validator`] -- 5-7-5 structure checking over a full text block
//! - [`markup`] -- block-markup flattening for hosts that store rich content
//!   (feature `markup`, enabled by default)
//!
//! The validator consumes plain text only. Hosts holding markup compose the
//! flattener with the validator:
//!
//! ```
//! use haiku_en::{markup, validator};
//!
//! let text = markup::plain_text(
//!     "<p>An old silent pond</p>\
//!      <p>A frog jumps into the pond</p>\
//!      <p>Splash! Silence again.</p>",
//! );
//! assert!(validator::validate_haiku(&text).is_ok());
//! ```

#[cfg(feature = "markup")]
pub mod markup;
pub mod syllable;
pub mod validator;
