//! The credential store: one pending passcode per email.
//!
//! [`OtpRepository`] is the storage abstraction for pending one-time
//! codes. [`InMemoryOtpRepository`] is the built-in process-lifetime
//! implementation; implement the trait yourself to back the store with
//! something else (e.g. Redis) without touching the actions.
//!
//! Invariant: a code's presence in the store is the sole authority for
//! "this email is awaiting verification". Absence means the code was
//! either never issued or already consumed.

mod memory;
mod otp;

pub use memory::InMemoryOtpRepository;
pub use otp::OtpRepository;
pub use otp::PendingCode;
