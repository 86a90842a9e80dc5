use crate::affine::Affine;
use crate::aliases::Vec3;

/// A ray stamped with the time it was generated (used for motion blur).
/// The direction is not required to be unit length.
#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub time: f32,
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3, time: f32) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
            time,
        }
    }
    /// Position along the ray at parameter t.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
    pub fn transformed(&self, tr: &Affine) -> Ray {
        Ray::new(
            &tr.apply_point(&self.origin),
            &tr.apply_vec(&self.direction),
            self.time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_is_affine_in_t() {
        let ray = Ray::new(&Vec3::new(1.0, 0.0, -2.0), &Vec3::new(0.0, 2.0, 1.0), 0.5);
        assert_eq!(ray.point_at(0.0), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(ray.point_at(2.0), Vec3::new(1.0, 4.0, 0.0));
        assert_eq!(ray.time, 0.5);
    }
}
