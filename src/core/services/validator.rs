//! Code validator - decides whether a normalized line is a well-formed code

/// Required code length in characters
pub const CODE_LENGTH: usize = 18;

/// Whether `code` is exactly 18 ASCII letters or digits
///
/// Case-sensitive and never canonicalizes: `abc…` and `ABC…` are both valid
/// and stay distinct codes.
#[must_use]
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
