use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use crate::util::{max_vec3, min_vec3};
use rand::Rng;
use std::sync::Arc;

/// Padding that keeps axis-aligned rectangles from producing
/// zero-thickness bounding boxes.
const BBOX_PAD: f32 = 1e-4;

/// Parallelogram spanned by two orthogonal edges. The outward face is the
/// one the winding points at: normal = edge_0 x edge_1, normalized.
pub struct Rectangle {
    origin: Vec3,
    edge_0: Vec3,
    edge_1: Vec3,
    normal: Vec3,
    area: f32,
    material: Arc<Material>,
}

impl Rectangle {
    pub fn new(origin: &Vec3, edge_0: &Vec3, edge_1: &Vec3, material: Arc<Material>) -> Self {
        let cross = edge_0.cross(edge_1);
        Rectangle {
            origin: *origin,
            edge_0: *edge_0,
            edge_1: *edge_1,
            normal: cross.normalize(),
            area: cross.norm(),
            material,
        }
    }
}

impl Hitable for Rectangle {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let denom = ray.direction.dot(&self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = (self.origin - ray.origin).dot(&self.normal) / denom;
        if t <= t_min || t_max <= t {
            return None;
        }
        let point = ray.point_at(t);
        let rel = point - self.origin;
        let u = rel.dot(&self.edge_0) / self.edge_0.norm_squared();
        let v = rel.dot(&self.edge_1) / self.edge_1.norm_squared();
        if u < 0.0 || 1.0 < u || v < 0.0 || 1.0 < v {
            return None;
        }
        Some(HitRecord::with_face_normal(
            ray,
            t,
            point,
            Vec2::new(u, v),
            &self.normal,
            self.material.as_ref(),
        ))
    }
    fn bounding_box(&self, _time_0: f32, _time_1: f32) -> Option<Aabb> {
        let mut mn = self.origin;
        let mut mx = self.origin;
        for corner in &[
            self.origin + self.edge_0,
            self.origin + self.edge_1,
            self.origin + self.edge_0 + self.edge_1,
        ] {
            mn = min_vec3(&mn, corner);
            mx = max_vec3(&mx, corner);
        }
        let pad = Vec3::new(BBOX_PAD, BBOX_PAD, BBOX_PAD);
        Some(Aabb::new(&(mn - pad), &(mx + pad)))
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        self.origin + rng.gen::<f32>() * self.edge_0 + rng.gen::<f32>() * self.edge_1 - origin
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f32 {
        match self.hit(&Ray::new(origin, dir, 0.0), 1e-3, f32::MAX) {
            Some(rec) => {
                let dist_squared = (rec.point - origin).norm_squared();
                let cosine = dir.normalize().dot(&rec.normal).abs();
                if cosine <= 0.0 {
                    return 0.0;
                }
                dist_squared / (cosine * self.area)
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use rand::SeedableRng;

    fn unit_rect_above() -> Rectangle {
        // unit square at y=1, outward face down
        Rectangle::new(
            &Vec3::new(-0.5, 1.0, -0.5),
            &Vec3::new(1.0, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, 1.0),
            Arc::new(Material::DiffuseLight {
                emit: Texture::rgb(1.0, 1.0, 1.0),
            }),
        )
    }

    #[test]
    fn hit_reports_plane_coordinates() {
        let rect = unit_rect_above();
        let ray = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 1.0, 0.0), 0.0);
        let rec = rect.hit(&ray, 1e-3, f32::MAX).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-6);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::new(0.0, -1.0, 0.0)).norm() < 1e-6);
        assert!((rec.tex_coord - Vec2::new(0.5, 0.5)).norm() < 1e-6);
        // outside the edges there is no hit
        let wide = Ray::new(&Vec3::new(2.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert!(rect.hit(&wide, 1e-3, f32::MAX).is_none());
    }

    #[test]
    fn density_is_distance_squared_over_projected_area() {
        let rect = unit_rect_above();
        let density = rect.direction_density(&Vec3::zeros(), &Vec3::new(0.0, 1.0, 0.0));
        assert!((density - 1.0).abs() < 1e-5);
        // a direction that misses the rectangle has no density
        assert_eq!(
            rect.direction_density(&Vec3::zeros(), &Vec3::new(1.0, 0.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn sampled_directions_reach_the_rectangle() {
        let rect = unit_rect_above();
        let mut rng = RandGen::seed_from_u64(9);
        for _ in 0..500 {
            let dir = rect.random_direction_from(&Vec3::zeros(), &mut rng);
            assert!(rect.direction_density(&Vec3::zeros(), &dir) > 0.0);
        }
    }
}
