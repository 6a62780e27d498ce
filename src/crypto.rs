use std::fmt;

/// Number of decimal digits in a generated passcode.
pub const PASSCODE_DIGITS: usize = 6;

const PASSCODE_MIN: u32 = 100_000;
const PASSCODE_MAX: u32 = 999_999;

/// A one-time passcode.
///
/// `Passcode` implements `Debug` and `Display` to show `[REDACTED]` instead
/// of the digits, preventing codes from being accidentally logged or
/// printed. Access the digits via [`expose_secret`](Self::expose_secret)
/// when handing the code to a delivery channel.
///
/// Passcodes are deliberately not serializable: pending codes live only in
/// the credential store and are never persisted.
///
/// # Example
///
/// ```rust
/// use passgate::crypto::generate_passcode;
///
/// let code = generate_passcode();
///
/// assert_eq!(format!("{:?}", code), "Passcode([REDACTED])");
/// assert_eq!(code.expose_secret().len(), 6);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Passcode(String);

impl Passcode {
    /// Wraps an existing code string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Exposes the digits.
    ///
    /// Use this only at the delivery boundary (logging stub, email/SMS
    /// sender) or when comparing against a submitted candidate.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passcode([REDACTED])")
    }
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Generates a uniformly random 6-digit passcode.
///
/// Codes are drawn from `100000..=999999`, so the leading digit is never
/// zero and the code is always exactly [`PASSCODE_DIGITS`] characters.
/// `ThreadRng` is a CSPRNG, so codes are not guessable beyond their
/// 900000-value range.
pub fn generate_passcode() -> Passcode {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    Passcode(rng.gen_range(PASSCODE_MIN..=PASSCODE_MAX).to_string())
}
