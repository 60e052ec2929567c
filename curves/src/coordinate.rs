use serde::{Serialize, Deserialize};

use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a bezier curve
///
pub trait Coordinate : Sized+Copy+Add<Self, Output=Self>+Mul<f32, Output=Self>+Sub<Self, Output=Self> {
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f32]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f32;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> f32 {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        f32::sqrt(squared_distance)
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    fn dot(&self, target: &Self) -> f32 {
        let mut dot_product = 0.0;

        for component_index in 0..Self::len() {
            dot_product += self.get(component_index) * target.get(component_index);
        }

        dot_product
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> f32 {
        f32::sqrt(self.dot(self))
    }

    ///
    /// Treating this as a vector, returns a unit vector in the same direction
    ///
    #[inline]
    fn to_unit_vector(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Self::origin()
        } else {
            *self * (1.0/magnitude)
        }
    }

    #[inline]
    fn is_nan(&self) -> bool {
        (0..Self::len()).any(|component| self.get(component).is_nan())
    }
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

impl Coordinate for f32 {
    fn from_components(components: &[f32]) -> f32 {
        components[0]
    }

    #[inline] fn origin() -> f32 { 0.0 }
    #[inline] fn len() -> usize { 1 }
    #[inline] fn get(&self, _index: usize) -> f32 { *self }

    #[inline]
    fn distance_to(&self, target: &f32) -> f32 {
        f32::abs(self-target)
    }

    fn dot(&self, target: &f32) -> f32 {
        self * target
    }
}

/// Represents a 2D point on the canvas
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f32, pub f32);

impl Coord2 {
    ///
    /// Rotates this point about a center point by an angle in degrees (clockwise in canvas coordinates, where y points down)
    ///
    pub fn rotate_about(self, center: Coord2, degrees: f32) -> Coord2 {
        let radians     = degrees.to_radians();
        let (sin, cos)  = radians.sin_cos();
        let Coord2(dx, dy) = self - center;

        Coord2(center.0 + dx*cos - dy*sin, center.1 + dx*sin + dy*cos)
    }

    ///
    /// Scales the distance between this point and a center point by a factor
    ///
    #[inline]
    pub fn scale_about(self, center: Coord2, factor: f32) -> Coord2 {
        center + (self - center) * factor
    }
}

impl Coordinate2D for Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> f32 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> f32 {
        self.1
    }
}

impl From<(f32, f32)> for Coord2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Coord2 {
        Coord2(x, y)
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f32> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f32) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Div<f32> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn div(self, rhs: f32) -> Coord2 {
        Coord2(self.0 / rhs, self.1 / rhs)
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn from_components(components: &[f32]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 2 }

    #[inline]
    fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components")
        }
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f32 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f32::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    #[inline]
    fn dot(&self, target: &Self) -> f32 {
        self.0*target.0 + self.1*target.1
    }
}
