//! Shorthand for building points in tests and fixtures.

/// Construct a [`Point`](crate::point::Point) from anything convertible into
/// [`BigInt`](num_bigint::BigInt).
///
/// ```
/// use recovery_math::prelude::*;
///
/// let p = pt!(3, 12);
/// assert_eq!(p, Point::new(3, 12));
/// ```
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::point::Point::new($x, $y)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use recovery_math::prelude::*;
///
/// let points = pts![(1, 4), (2, 7), (3, 12)];
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1], pt!(2, 7));
/// ```
#[macro_export]
macro_rules! pts {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),*]
    };
}
