#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Possible relations between two rectangles A and B.
/// A is `GeoRelation` to B. Shared edges do not count as an intersection.
pub enum GeoRelation {
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// A ∩ B = ∅
    Disjoint,
}
