//! Directional pair enumeration.

/// Indices of an origin and a distinct destination in a location slice.
///
/// Driving time is directional, so `(a, b)` and `(b, a)` are separate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedPair {
    /// Index of the origin location.
    pub origin: usize,
    /// Index of the destination location.
    pub destination: usize,
}

/// Enumerate every ordered pair `(i, j)` with `i != j` over `0..count`, in
/// lexicographic order.
///
/// Yields `count * (count - 1)` pairs, or none when `count < 2`.
///
/// # Examples
///
/// ```
/// use depot_core::ordered_pairs;
///
/// let pairs: Vec<_> = ordered_pairs(3)
///     .map(|pair| (pair.origin, pair.destination))
///     .collect();
/// assert_eq!(pairs, [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
/// ```
pub fn ordered_pairs(count: usize) -> impl Iterator<Item = OrderedPair> {
    (0..count).flat_map(move |origin| {
        (0..count)
            .filter(move |&destination| destination != origin)
            .map(move |destination| OrderedPair {
                origin,
                destination,
            })
    })
}

/// Number of pairs [`ordered_pairs`] yields for `count` locations.
#[must_use]
pub const fn ordered_pair_count(count: usize) -> usize {
    count.saturating_mul(count.saturating_sub(1))
}
