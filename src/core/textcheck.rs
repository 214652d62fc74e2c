//! Text-constraint validation for extracted ABCD phrases
//!
//! Behavior, condition, and degree are expected to be verbatim phrases lifted
//! out of the outcome statement. These checks are pure and never fail: an
//! empty string is a valid input meaning "not yet provided" (the caller
//! decides whether the field is required).

/// Case-insensitive containment check on trimmed strings.
///
/// An empty needle is trivially contained; required-ness is the caller's
/// concern.
#[must_use]
pub fn is_substring(needle: &str, haystack: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystack.trim().to_lowercase().contains(&needle)
}

/// Whether any two of the three phrases are equal or one contains the other,
/// case-insensitive. Empty phrases never overlap.
///
/// Equality is treated as containment, so all six directional checks reduce
/// to three unordered pairs OR'd together.
#[must_use]
pub fn has_overlap(a: &str, b: &str, c: &str) -> bool {
    pair_overlaps(a, b) || pair_overlaps(a, c) || pair_overlaps(b, c)
}

/// One unordered pair: contains-in-either-direction on trimmed, lowercased
/// strings.
fn pair_overlaps(x: &str, y: &str) -> bool {
    let x = x.trim().to_lowercase();
    let y = y.trim().to_lowercase();
    if x.is_empty() || y.is_empty() {
        return false;
    }
    x.contains(&y) || y.contains(&x)
}
