//! Size ordering table.
//!
//! Every grid in the system lays its size columns out by this table so that
//! `PP P M G GG G1 G2 G3` always reads left to right regardless of the order
//! in which sizes were entered. Rank 6 is vacant.

use core::cmp::Ordering;

/// Rank given to any label missing from the table.
pub const UNRANKED: u8 = 99;

/// Ranked sizes, in rank order.
pub const SIZE_TABLE: [(&str, u8); 8] = [
    ("PP", 1),
    ("P", 2),
    ("M", 3),
    ("G", 4),
    ("GG", 5),
    ("G1", 7),
    ("G2", 8),
    ("G3", 9),
];

/// Sizes offered when registering a new grade.
pub fn standard_sizes() -> impl Iterator<Item = &'static str> {
    SIZE_TABLE.iter().map(|(label, _)| *label)
}

/// Rank of a size label (exact, case-sensitive match); [`UNRANKED`] otherwise.
pub fn size_rank(label: &str) -> u8 {
    SIZE_TABLE
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED)
}

/// Compare two size labels by rank only.
///
/// Unranked labels compare equal to each other; combine with a stable sort to
/// keep them in first-seen order.
pub fn compare_sizes(a: &str, b: &str) -> Ordering {
    size_rank(a).cmp(&size_rank(b))
}

/// Stable in-place sort of size labels by rank.
pub fn sort_sizes<S: AsRef<str>>(sizes: &mut [S]) {
    sizes.sort_by(|a, b| compare_sizes(a.as_ref(), b.as_ref()));
}
