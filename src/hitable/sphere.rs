use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::onb::Onb;
use crate::pdf::random_in_cone;
use crate::ray::Ray;
use std::f32::consts::PI;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f32, material: Arc<Material>) -> Self {
        Sphere {
            center: *center,
            radius,
            material,
        }
    }
    /// Parameter t at which the ray first meets the sphere surface.
    fn hit_core(center: &Vec3, radius: f32, ray: &Ray, t_min: f32, t_max: f32) -> Option<f32> {
        let oc = ray.origin - center;
        let a = ray.direction.dot(&ray.direction);
        let half_b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - radius * radius;
        let disc = half_b * half_b - a * c;
        if disc <= 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        for t in &[(-half_b - disc_rt) / a, (-half_b + disc_rt) / a] {
            if t_min < *t && *t < t_max {
                return Some(*t);
            }
        }
        None
    }
    /// Texture coordinates of a point on the unit sphere.
    fn surface_uv(p: &Vec3) -> Vec2 {
        let phi = p[2].atan2(p[0]);
        let theta = p[1].max(-1.0).min(1.0).asin();
        Vec2::new(0.5 - 0.5 * (phi / PI), 0.5 + theta / PI)
    }
    /// Cosine of the half angle of the cone subtended from `origin`.
    /// Clamped at zero, so an anchor inside the sphere degrades to the
    /// hemisphere toward the center instead of producing NaN.
    fn cone_cosine(&self, origin: &Vec3) -> f32 {
        let ratio = self.radius * self.radius / (self.center - origin).norm_squared();
        (1.0 - ratio).max(0.0).sqrt()
    }
}

impl Hitable for Sphere {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max).map(|t| {
            let point = ray.point_at(t);
            let outward = (point - self.center) / self.radius;
            HitRecord::with_face_normal(
                ray,
                t,
                point,
                Sphere::surface_uv(&outward),
                &outward,
                self.material.as_ref(),
            )
        })
    }
    fn bounding_box(&self, _time_0: f32, _time_1: f32) -> Option<Aabb> {
        let rad_vec = Vec3::new(self.radius, self.radius, self.radius);
        Some(Aabb::new(
            &(self.center - rad_vec),
            &(self.center + rad_vec),
        ))
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        let local = random_in_cone(self.cone_cosine(origin), rng);
        Onb::from_w(&(self.center - origin)).to_global(&local)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f32 {
        let cos_max = self.cone_cosine(origin);
        let cosine = (self.center - origin).normalize().dot(&dir.normalize());
        if cosine > cos_max {
            // uniform over the subtended solid angle
            1.0 / (2.0 * PI * (1.0 - cos_max))
        } else {
            0.0
        }
    }
}

/// Sphere whose center moves linearly over the shutter interval [0, 1].
pub struct MovingSphere {
    center_0: Vec3,
    center_1: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl MovingSphere {
    pub fn new(center_0: &Vec3, center_1: &Vec3, radius: f32, material: Arc<Material>) -> Self {
        MovingSphere {
            center_0: *center_0,
            center_1: *center_1,
            radius,
            material,
        }
    }
    fn center_at(&self, time: f32) -> Vec3 {
        self.center_0 + time * (self.center_1 - self.center_0)
    }
    fn bounding_box_at(&self, time: f32) -> Aabb {
        let rad_vec = Vec3::new(self.radius, self.radius, self.radius);
        let center = self.center_at(time);
        Aabb::new(&(center - rad_vec), &(center + rad_vec))
    }
}

impl Hitable for MovingSphere {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let center = self.center_at(ray.time);
        Sphere::hit_core(&center, self.radius, ray, t_min, t_max).map(|t| {
            let point = ray.point_at(t);
            let outward = (point - center) / self.radius;
            HitRecord::with_face_normal(
                ray,
                t,
                point,
                Sphere::surface_uv(&outward),
                &outward,
                self.material.as_ref(),
            )
        })
    }
    fn bounding_box(&self, time_0: f32, time_1: f32) -> Option<Aabb> {
        Some(Aabb::unite(
            &self.bounding_box_at(time_0),
            &self.bounding_box_at(time_1),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use rand::SeedableRng;

    fn gray() -> Arc<Material> {
        Arc::new(Material::Lambertian {
            albedo: Texture::rgb(0.5, 0.5, 0.5),
        })
    }

    #[test]
    fn hit_reports_distance_and_oriented_normal() {
        let sphere = Sphere::new(&Vec3::zeros(), 1.0, gray());
        let ray = Ray::new(&Vec3::new(0.0, 0.0, -5.0), &Vec3::new(0.0, 0.0, 1.0), 0.0);
        let rec = sphere.hit(&ray, 1e-3, f32::MAX).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
        assert!(rec.front_face);
        // from inside, the normal still faces the ray
        let inner = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 0.0, 1.0), 0.0);
        let rec = sphere.hit(&inner, 1e-3, f32::MAX).unwrap();
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
    }

    #[test]
    fn sampled_directions_carry_the_cone_density() {
        let sphere = Sphere::new(&Vec3::new(0.0, 0.0, 5.0), 1.0, gray());
        let origin = Vec3::zeros();
        let cos_max = (1.0f32 - 1.0 / 25.0).sqrt();
        let uniform = 1.0 / (2.0 * PI * (1.0 - cos_max));
        let mut rng = RandGen::seed_from_u64(41);
        let mut inside = 0;
        for _ in 0..1000 {
            let dir = sphere.random_direction_from(&origin, &mut rng);
            let density = sphere.direction_density(&origin, &dir);
            // boundary samples may land on the zero side of the cone test
            if density > 0.0 {
                inside += 1;
                assert!((density - uniform).abs() < 1e-6 * uniform.max(1.0));
            }
        }
        assert!(inside >= 990, "only {} samples inside the cone", inside);
        // a direction that clearly misses carries no density
        assert_eq!(
            sphere.direction_density(&origin, &Vec3::new(1.0, 0.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn anchor_inside_the_sphere_stays_finite() {
        let sphere = Sphere::new(&Vec3::zeros(), 2.0, gray());
        let origin = Vec3::new(0.5, 0.0, 0.0);
        let mut rng = RandGen::seed_from_u64(42);
        for _ in 0..100 {
            let dir = sphere.random_direction_from(&origin, &mut rng);
            assert!(dir.norm().is_finite());
            let density = sphere.direction_density(&origin, &dir);
            assert!(density.is_finite() && density >= 0.0);
        }
    }

    #[test]
    fn moving_sphere_follows_the_shutter() {
        let sphere = MovingSphere::new(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(2.0, 0.0, 0.0),
            0.5,
            gray(),
        );
        let down = Vec3::new(0.0, -1.0, 0.0);
        let early = Ray::new(&Vec3::new(0.0, 5.0, 0.0), &down, 0.0);
        assert!(sphere.hit(&early, 1e-3, f32::MAX).is_some());
        let late = Ray::new(&Vec3::new(0.0, 5.0, 0.0), &down, 1.0);
        assert!(sphere.hit(&late, 1e-3, f32::MAX).is_none());
        let bbox = sphere.bounding_box(0.0, 1.0).unwrap();
        assert!(bbox.min[0] <= -0.5 && bbox.max[0] >= 2.5);
    }
}
