pub mod bvh_node;
pub mod empty;
pub mod hitable_list;
pub mod rectangle;
pub mod sphere;
pub mod transform;

use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::hitable_list::HitableList;
use crate::hitable::rectangle::Rectangle;
use crate::material::Material;
use crate::ray::Ray;
use std::sync::Arc;

/// Scene geometry: intersection queries plus the two hooks the
/// light-importance sampler needs from a sampling target.
pub trait Hitable: Send + Sync {
    /// First intersection with the ray over the open interval
    /// (t_min, t_max), if any.
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>>;
    /// Occlusion-only variant; override where a cheaper answer exists.
    fn is_hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
        self.hit(ray, t_min, t_max).is_some()
    }
    /// None when no finite box exists (e.g. unbounded geometry).
    fn bounding_box(&self, time_0: f32, time_1: f32) -> Option<Aabb>;
    /// A random direction from `origin` toward this geometry. Only
    /// sampling targets implement this.
    fn random_direction_from(&self, _origin: &Vec3, _rng: &mut RandGen) -> Vec3 {
        unimplemented!()
    }
    /// Solid-angle density of `random_direction_from` at `dir`; zero
    /// wherever `dir` misses this geometry.
    fn direction_density(&self, _origin: &Vec3, _dir: &Vec3) -> f32 {
        0.0
    }
}

/// Axis-aligned box spanning (0,0,0)..size, faces wound outward.
pub fn cuboid(size: &Vec3, material: Arc<Material>) -> HitableList {
    let (sx, sy, sz) = (size[0], size[1], size[2]);
    let faces: Vec<Arc<dyn Hitable>> = vec![
        // bottom, facing -y
        Arc::new(Rectangle::new(
            &Vec3::zeros(),
            &Vec3::new(sx, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, sz),
            material.clone(),
        )),
        // top, facing +y
        Arc::new(Rectangle::new(
            &Vec3::new(0.0, sy, 0.0),
            &Vec3::new(0.0, 0.0, sz),
            &Vec3::new(sx, 0.0, 0.0),
            material.clone(),
        )),
        // left, facing -x
        Arc::new(Rectangle::new(
            &Vec3::zeros(),
            &Vec3::new(0.0, 0.0, sz),
            &Vec3::new(0.0, sy, 0.0),
            material.clone(),
        )),
        // right, facing +x
        Arc::new(Rectangle::new(
            &Vec3::new(sx, 0.0, 0.0),
            &Vec3::new(0.0, sy, 0.0),
            &Vec3::new(0.0, 0.0, sz),
            material.clone(),
        )),
        // near, facing -z
        Arc::new(Rectangle::new(
            &Vec3::zeros(),
            &Vec3::new(0.0, sy, 0.0),
            &Vec3::new(sx, 0.0, 0.0),
            material.clone(),
        )),
        // far, facing +z
        Arc::new(Rectangle::new(
            &Vec3::new(0.0, 0.0, sz),
            &Vec3::new(sx, 0.0, 0.0),
            &Vec3::new(0.0, sy, 0.0),
            material,
        )),
    ];
    HitableList::new(faces)
}
