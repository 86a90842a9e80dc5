use crate::aabb::Aabb;
use crate::affine::Affine;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

/// Instancing wrapper: intersects in the original's local frame and maps
/// the record back out. The bounding box is fixed at construction.
pub struct Transform {
    original: Arc<dyn Hitable>,
    transform: Affine,
    inv_transform: Affine,
    bbox: Option<Aabb>,
}

impl Transform {
    /// time_0, time_1 bound the bbox of moving geometry.
    pub fn new(original: Arc<dyn Hitable>, tr: &Affine, time_0: f32, time_1: f32) -> Self {
        let bbox = original
            .bounding_box(time_0, time_1)
            .map(|bbox| bbox.transformed(tr));
        Transform {
            original,
            transform: *tr,
            inv_transform: tr.inverse(),
            bbox,
        }
    }
}

impl Hitable for Transform {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        self.original
            .hit(&ray.transformed(&self.inv_transform), t_min, t_max)
            .map(|rec| rec.transformed(&self.transform))
    }
    fn bounding_box(&self, _time_0: f32, _time_1: f32) -> Option<Aabb> {
        self.bbox
    }
}
