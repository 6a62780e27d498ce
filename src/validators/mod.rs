//! Caller-side input validation.
//!
//! The authentication core never validates email syntax itself; the
//! embedding layer checks shape before requesting a code. These helpers
//! are what it checks with.

mod email;

pub use email::{validate_email, ValidationError};
