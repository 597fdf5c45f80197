//! Shared string helpers for name derivation.

/// Lower-case the first character and keep the rest unchanged
/// (e.g., "CreditCard" -> "creditCard").
///
/// Only the first character is folded, and only if it is ASCII, so names
/// differing solely in the case of their first character map to the same
/// result.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => std::iter::once(c.to_ascii_lowercase()).chain(chars).collect(),
    }
}

/// Convert a string to PascalCase the way protoc names Java outer classes
/// (e.g., "billing_service" -> "BillingService", "v2api" -> "V2Api").
///
/// ASCII letters and digits are kept; every other character is dropped and
/// upper-cases the next letter. A letter following a digit is upper-cased.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut cap_next = true;
    for c in s.chars() {
        if c.is_ascii_lowercase() {
            out.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_uppercase() {
            out.push(c);
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }
    out
}
