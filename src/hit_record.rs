use crate::affine::Affine;
use crate::aliases::{Vec2, Vec3};
use crate::material::Material;
use crate::ray::Ray;

/// Result of a successful ray-geometry intersection. Built fresh per
/// intersection test and consumed immediately by the estimator.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f32,
    pub point: Vec3,
    pub tex_coord: Vec2,
    /// Unit normal, always oriented against the incoming ray.
    pub normal: Vec3,
    /// True when the ray hit the outward-facing side of the surface.
    pub front_face: bool,
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Orients `outward_normal` against the ray and records which side
    /// was hit. `outward_normal` must be unit length.
    pub fn with_face_normal(
        ray: &Ray,
        t: f32,
        point: Vec3,
        tex_coord: Vec2,
        outward_normal: &Vec3,
        material: &'a Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            *outward_normal
        } else {
            -*outward_normal
        };
        HitRecord {
            t,
            point,
            tex_coord,
            normal,
            front_face,
            material,
        }
    }
    pub fn transformed(&self, tr: &Affine) -> HitRecord<'a> {
        HitRecord {
            point: tr.apply_point(&self.point),
            normal: tr.apply_normal(&self.normal).normalize(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    #[test]
    fn normal_is_oriented_against_the_ray() {
        let material = Material::Lambertian {
            albedo: Texture::rgb(0.5, 0.5, 0.5),
        };
        let outward = Vec3::new(0.0, 1.0, 0.0);
        let from_above = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let rec = HitRecord::with_face_normal(
            &from_above,
            1.0,
            Vec3::zeros(),
            Vec2::zeros(),
            &outward,
            &material,
        );
        assert!(rec.front_face);
        assert_eq!(rec.normal, outward);

        let from_below = Ray::new(&Vec3::new(0.0, -1.0, 0.0), &Vec3::new(0.0, 1.0, 0.0), 0.0);
        let rec = HitRecord::with_face_normal(
            &from_below,
            1.0,
            Vec3::zeros(),
            Vec2::zeros(),
            &outward,
            &material,
        );
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -outward);
    }
}
