//! Diagnostics for the plate language.
//!
//! Every user-facing failure carries:
//! - an [`ErrorCode`] for searchability (`plate explain E1002`)
//! - a message saying what went wrong
//! - a primary label pointing at the offending source span
//! - optional notes and suggestions
//!
//! Emitters turn a [`Diagnostic`] into text; see [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;
