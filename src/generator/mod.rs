//! Random password generation from a character-class policy.

use rand::Rng;

use crate::errors::{PassVaultError, Result};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Which characters a generated password may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(PassVaultError::InvalidPasswordOptions(format!(
                "length must be between {MIN_LENGTH} and {MAX_LENGTH} (got {})",
                self.length
            )));
        }
        if !(self.lowercase || self.uppercase || self.digits || self.symbols) {
            return Err(PassVaultError::InvalidPasswordOptions(
                "at least one character class must be selected".into(),
            ));
        }
        Ok(())
    }

    fn charset(&self) -> Vec<u8> {
        [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.iter().copied())
        .collect()
    }
}

/// Draw each character uniformly from the enabled classes.
///
/// Uses the thread-local CSPRNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    options.validate()?;

    let charset = options.charset();
    let mut rng = rand::rng();
    let password = (0..options.length)
        .map(|_| char::from(charset[rng.random_range(0..charset.len())]))
        .collect();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(lowercase: bool, uppercase: bool, digits: bool, symbols: bool) -> PasswordOptions {
        PasswordOptions {
            length: 32,
            lowercase,
            uppercase,
            digits,
            symbols,
        }
    }

    #[test]
    fn default_password_has_default_length() {
        let pw = generate_password(&PasswordOptions::default()).unwrap();
        assert_eq!(pw.len(), DEFAULT_LENGTH);
        assert!(pw.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn respects_selected_classes() {
        let digits = generate_password(&only(false, false, true, false)).unwrap();
        assert!(digits.bytes().all(|b| b.is_ascii_digit()));

        let upper = generate_password(&only(false, true, false, false)).unwrap();
        assert!(upper.bytes().all(|b| b.is_ascii_uppercase()));

        let symbols = generate_password(&only(false, false, false, true)).unwrap();
        assert!(symbols.bytes().all(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        for length in [0, MIN_LENGTH - 1, MAX_LENGTH + 1] {
            let opts = PasswordOptions {
                length,
                ..PasswordOptions::default()
            };
            assert!(matches!(
                generate_password(&opts),
                Err(PassVaultError::InvalidPasswordOptions(_))
            ));
        }
    }

    #[test]
    fn accepts_boundary_lengths() {
        for length in [MIN_LENGTH, MAX_LENGTH] {
            let opts = PasswordOptions {
                length,
                ..PasswordOptions::default()
            };
            assert_eq!(generate_password(&opts).unwrap().len(), length);
        }
    }

    #[test]
    fn rejects_empty_charset() {
        assert!(generate_password(&only(false, false, false, false)).is_err());
    }

    #[test]
    fn successive_passwords_differ() {
        let opts = PasswordOptions::default();
        assert_ne!(
            generate_password(&opts).unwrap(),
            generate_password(&opts).unwrap()
        );
    }
}
