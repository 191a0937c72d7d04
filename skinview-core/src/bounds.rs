//! Axis-aligned bounding volumes

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::Point3f;

/// A minimal axis-aligned box enclosing some geometry
///
/// Bounding volumes are derived data: they are recomputed on demand from the
/// current geometry and never cached, so they cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Create a bounding box from its corner points
    pub fn new(min: Point3f, max: Point3f) -> Self {
        Self { min, max }
    }

    /// Create a degenerate box containing a single point
    pub fn from_point(point: Point3f) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Compute the minimal box enclosing all given points
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3f>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.grow(point);
        }
        Some(bounds)
    }

    /// Expand the box to contain the given point
    pub fn grow(&mut self, point: Point3f) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// The minimal box enclosing both `self` and `other`
    pub fn merged(&self, other: &Self) -> Self {
        let mut bounds = *self;
        bounds.grow(other.min);
        bounds.grow(other.max);
        bounds
    }

    /// Center point of the box
    pub fn center(&self) -> Point3f {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Scalar size of the box: the length of its diagonal
    pub fn size(&self) -> f32 {
        (self.max - self.min).norm()
    }
}

/// Trait for objects with a derivable bounding volume
pub trait Bounded {
    /// The minimal axis-aligned box enclosing the object's renderable
    /// geometry, or `None` when there is none.
    fn bounding_box(&self) -> Option<Aabb>;
}
