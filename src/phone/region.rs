//! Country hints typed in front of a local-format number.

use phonenumber::country;

/// Colloquial codes users type that differ from the CLDR region code.
const REGION_ALIASES: &[(&str, country::Id)] = &[("UK", country::Id::GB)];

/// Resolve a user-typed hint such as `us`, `GB` or `UK` to a region.
///
/// Returns `None` when the token is not a known region code ("hi", "ok").
/// Many short words are region codes all the same ("my", "it", "is"), so
/// callers must not trust a hint whose number does not validate.
pub fn region_from_hint(token: &str) -> Option<country::Id> {
    let upper = token.trim().to_ascii_uppercase();

    if let Some((_, id)) = REGION_ALIASES.iter().find(|(alias, _)| *alias == upper) {
        return Some(*id);
    }

    upper.parse().ok()
}
