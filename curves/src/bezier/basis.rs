use super::super::coordinate::*;

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis<Point: Coordinate>(t: f32, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*t_cubed
}
