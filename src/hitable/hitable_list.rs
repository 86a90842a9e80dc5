use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// Flat collection of geometry. Also serves as a sampling target, where
/// generation picks one member uniformly while the density averages every
/// member's contribution.
pub struct HitableList {
    pub list: Vec<Arc<dyn Hitable>>,
}

impl HitableList {
    pub fn new(list: Vec<Arc<dyn Hitable>>) -> Self {
        HitableList { list }
    }
}

impl Hitable for HitableList {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let mut closest: Option<HitRecord<'s>> = None;
        let mut closest_t = t_max;
        for obj in &self.list {
            if let Some(rec) = obj.hit(ray, t_min, closest_t) {
                closest_t = rec.t;
                closest = Some(rec);
            }
        }
        closest
    }
    fn is_hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
        self.list.iter().any(|obj| obj.is_hit(ray, t_min, t_max))
    }
    fn bounding_box(&self, time_0: f32, time_1: f32) -> Option<Aabb> {
        let mut whole = Aabb::empty();
        for obj in &self.list {
            whole = Aabb::unite(&whole, &obj.bounding_box(time_0, time_1)?);
        }
        Some(whole)
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        debug_assert!(!self.list.is_empty());
        let idx = (rng.gen::<f32>() * self.list.len() as f32) as usize;
        self.list[idx].random_direction_from(origin, rng)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f32 {
        if self.list.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .list
            .iter()
            .map(|obj| obj.direction_density(origin, dir))
            .sum();
        sum / self.list.len() as f32
    }
}
