use recovery_math::error::InterpolationError;
use recovery_math::Point;
use serde::Serialize;

use crate::error::Result;
use crate::share::Share;

/// Decoded points of one test case, ordered by `x` with no repeated `x`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every share; fails on the first malformed share or on two
    /// shares with the same index.
    pub fn from_shares(shares: &[Share]) -> Result<Self> {
        let mut set = Self {
            points: Vec::with_capacity(shares.len()),
        };
        for share in shares {
            set.insert(share.decode()?)?;
        }
        Ok(set)
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let mut set = Self::new();
        for point in points {
            set.insert(point)?;
        }
        Ok(set)
    }

    /// Insert `point`, keeping the set ordered by `x`.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        match self.points.binary_search_by(|p| p.x.cmp(&point.x)) {
            Ok(_) => Err(InterpolationError::DuplicateX(point.x).into()),
            Err(pos) => {
                self.points.insert(pos, point);
                Ok(())
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Clone the points at `indices`, in the order given.
    pub fn select(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().map(|&i| self.points[i].clone()).collect()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = crate::error::RecoveryError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::from_points(points)
    }
}
