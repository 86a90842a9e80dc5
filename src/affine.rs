use crate::aliases::{Mat3, Vec3};
use nalgebra;

/// 3d invertible affine transformation x -> a*x + b.
/// The inverse and the determinant are cached at construction since every
/// instancing wrapper needs them per intersection query.
#[derive(Clone, Copy)]
pub struct Affine {
    a: Mat3,
    b: Vec3,
    a_inv: Mat3,
    a_det: f32,
}

impl Affine {
    fn from_parts(a: &Mat3, b: &Vec3) -> Self {
        Affine {
            a: *a,
            b: *b,
            a_inv: a.try_inverse().unwrap(),
            a_det: a.determinant(),
        }
    }
    fn linear_about(linear: &Mat3, pivot: &Vec3) -> Self {
        Affine::from_parts(linear, &(pivot - linear * pivot))
    }
    /// Rotation by |axis_angle| radians around its direction, fixing pivot.
    pub fn rotation(axis_angle: &Vec3, pivot: &Vec3) -> Self {
        Affine::linear_about(nalgebra::Rotation3::new(*axis_angle).matrix(), pivot)
    }
    /// Isotropic scaling fixing pivot.
    pub fn scale(factor: f32, pivot: &Vec3) -> Self {
        let diag = Vec3::new(factor, factor, factor);
        Affine::linear_about(&Mat3::from_diagonal(&diag), pivot)
    }
    pub fn translation(offset: &Vec3) -> Self {
        Affine::from_parts(&Mat3::identity(), offset)
    }
    pub fn inverse(&self) -> Affine {
        Affine {
            a: self.a_inv,
            b: -self.a_inv * self.b,
            a_inv: self.a,
            a_det: 1.0 / self.a_det,
        }
    }
    /// Composition that applies self first, then `next`.
    pub fn then(&self, next: &Affine) -> Affine {
        Affine {
            a: next.a * self.a,
            b: next.a * self.b + next.b,
            a_inv: self.a_inv * next.a_inv,
            a_det: next.a_det * self.a_det,
        }
    }
    /// Act on a point.
    pub fn apply_point(&self, pt: &Vec3) -> Vec3 {
        self.a * pt + self.b
    }
    /// Act on a vector (difference of two points).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        self.a * v
    }
    /// Act on a surface normal: inverse transpose, scaled by the
    /// determinant so orientation survives reflections.
    pub fn apply_normal(&self, n: &Vec3) -> Vec3 {
        self.a_det * self.a_inv.transpose() * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotation_moves_points_and_normals_alike() {
        let rot = Affine::rotation(&Vec3::new(0.0, 0.0, FRAC_PI_2), &Vec3::zeros());
        let pt = rot.apply_point(&Vec3::new(1.0, 0.0, 0.0));
        assert!((pt - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
        let n = rot.apply_normal(&Vec3::new(1.0, 0.0, 0.0));
        assert!((n - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn then_applies_left_to_right() {
        let tr = Affine::translation(&Vec3::new(1.0, 0.0, 0.0))
            .then(&Affine::rotation(&Vec3::new(0.0, 0.0, FRAC_PI_2), &Vec3::zeros()));
        let pt = tr.apply_point(&Vec3::zeros());
        assert!((pt - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn inverse_round_trips() {
        let tr = Affine::rotation(&Vec3::new(0.3, -0.2, 0.9), &Vec3::new(1.0, 2.0, 3.0))
            .then(&Affine::scale(2.5, &Vec3::zeros()));
        let pt = Vec3::new(-4.0, 0.5, 7.0);
        let back = tr.inverse().apply_point(&tr.apply_point(&pt));
        assert!((back - pt).norm() < 1e-4);
    }
}
