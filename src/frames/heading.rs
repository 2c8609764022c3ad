use nalgebra::Vector3;

use crate::projection::ClockCone;

/// Ordered unit directions. The frame they are expressed in is tracked by the
/// caller; output index `i` of every pipeline stage matches input index `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingSet(Vec<Vector3<f64>>);

impl HeadingSet {
    pub fn new(headings: Vec<Vector3<f64>>) -> Self {
        Self(headings)
    }

    /// Unit headings from clock/cone pairs measured about +z.
    pub fn from_clock_cone(angles: &[ClockCone]) -> Self {
        angles.iter().map(ClockCone::to_unit_vector).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector3<f64>> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Vector3<f64>] {
        &self.0
    }
}

impl FromIterator<Vector3<f64>> for HeadingSet {
    fn from_iter<I: IntoIterator<Item = Vector3<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HeadingSet {
    type Item = &'a Vector3<f64>;
    type IntoIter = std::slice::Iter<'a, Vector3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
