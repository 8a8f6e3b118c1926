//! Secure numeric code generation

use rand::rngs::OsRng;
use rand::Rng;

use crate::errors::ValidationError;

/// Generate a random code of exactly `length` decimal digits
///
/// Each digit is drawn independently from the OS CSPRNG, so there is no
/// modulo bias and leading zeros are as likely as any other digit. A
/// non-positive length is rejected before any randomness is drawn.
pub fn generate_code(length: usize) -> Result<String, ValidationError> {
    if length == 0 {
        return Err(ValidationError::InvalidCodeLength { length });
    }

    let mut rng = OsRng;
    let code = (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_code_is_all_digits() {
        for length in 1..=12 {
            let code = generate_code(length).unwrap();
            assert_eq!(code.len(), length);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let err = generate_code(0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCodeLength { length: 0 }));
    }

    #[test]
    fn test_codes_vary() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code(6).unwrap()).collect();
        // 100 draws of a 6-digit code all colliding is practically impossible
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_leading_zeros_are_permitted() {
        // With single-digit codes, a zero shows up quickly if zeros are
        // reachable at all positions.
        let saw_zero = (0..200).any(|_| generate_code(1).unwrap() == "0");
        assert!(saw_zero);
    }
}
