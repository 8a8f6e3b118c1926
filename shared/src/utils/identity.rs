//! Identity utilities
//!
//! An identity is the opaque recipient address an OTP is bound to, typically
//! a phone number in international format. Identities are personal data and
//! must never appear unmasked in logs.

/// Check whether an identity is missing for validation purposes
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Mask an identity for logging (show only the last 4 characters)
pub fn mask_identity(identity: &str) -> String {
    let chars: Vec<char> = identity.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}
