//! Radix-62 alias codec.
//!
//! Maps link identities to short printable aliases and back. The alias is
//! never stored: it is always derived from the identity, so alias uniqueness
//! follows from identity uniqueness and the injectivity of [`encode`].

/// Ordered alphabet: digits, then uppercase, then lowercase.
///
/// The symbol order is part of the wire format; changing it silently
/// remaps every alias ever issued.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Errors that can occur while decoding an alias.
///
/// Both variants mean the alias cannot correspond to any issued identity;
/// callers map them to a not-found outcome rather than an internal error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("character {0:?} is not in the base62 alphabet")]
    InvalidCharacter(char),

    #[error("alias encodes a value beyond the 64-bit identity range")]
    Overflow,
}

/// Encodes a non-negative identity as a base62 alias.
///
/// `encode(0)` returns `"0"` (a single alphabet symbol, never an empty
/// string). Larger values carry no leading-zero padding.
///
/// # Examples
///
/// ```
/// use shortlink::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(100_000_000), "6laZE");
/// ```
pub fn encode(n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::new();
    let mut n = n;
    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Decodes a base62 alias back to its identity.
///
/// Parses left to right, accumulating `acc * 62 + symbol_value`. Arithmetic
/// is checked: an alias whose value would wrap past `u64::MAX` is rejected
/// instead of silently aliasing a smaller identity.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] for any character outside the
/// alphabet and [`DecodeError::Overflow`] when the accumulated value exceeds
/// the 64-bit range.
pub fn decode(alias: &str) -> Result<u64, DecodeError> {
    let mut acc: u64 = 0;

    for c in alias.chars() {
        let value = symbol_value(c).ok_or(DecodeError::InvalidCharacter(c))?;
        acc = acc
            .checked_mul(BASE)
            .and_then(|shifted| shifted.checked_add(value))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(acc)
}

/// Positional value of a symbol, or `None` outside the alphabet.
fn symbol_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        'A'..='Z' => Some(c as u64 - 'A' as u64 + 10),
        'a'..='z' => Some(c as u64 - 'a' as u64 + 36),
        _ => None,
    }
}
