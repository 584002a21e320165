//! Word comparison primitives.
//!
//! Positions are counted in Unicode scalar values, not bytes, so `"né"` and
//! `"ne"` have the same length.

/// Number of positions at which `a` and `b` differ.
///
/// Returns `None` when the words have different lengths; such words are
/// not comparable and can never be adjacent.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut distance = 0;
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    distance += 1;
                }
            }
            (None, None) => return Some(distance),
            _ => return None,
        }
    }
}

/// `true` iff `a` and `b` have equal length and differ in exactly one position.
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    hamming_distance(a, b) == Some(1)
}
