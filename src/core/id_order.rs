//! Ordering for species ids such as `"002"` and `"002B"`.

use std::cmp::Ordering;

/// Split an id into its numeric prefix and whether it carries a variant letter.
///
/// Only `DIGITS` or `DIGITS` + one uppercase ASCII letter are accepted.
fn split_id(id: &str) -> Option<(u64, bool)> {
    let digits_end = id
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(id.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, rest) = id.split_at(digits_end);
    let variant = match rest.as_bytes() {
        [] => false,
        [b] if b.is_ascii_uppercase() => true,
        _ => return None,
    };
    let number = digits.parse::<u64>().ok()?;
    Some((number, variant))
}

/// Compare two species ids.
///
/// Numeric prefixes compare as integers; on a tie the id with a variant letter
/// sorts after the plain one, and two variants (or two plain ids) are equal.
/// Ids outside the pattern sort after every well-formed id and compare
/// lexicographically among themselves, which keeps the order total.
pub fn compare_species_ids(a: &str, b: &str) -> Ordering {
    match (split_id(a), split_id(b)) {
        (Some((na, va)), Some((nb, vb))) => na.cmp(&nb).then(va.cmp(&vb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Stable sort of `items` by the species id returned from `id`.
pub fn sort_by_species_id<T>(items: &mut [T], id: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| compare_species_ids(id(a), id(b)));
}
