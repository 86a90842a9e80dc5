use crate::affine::Affine;
use crate::aliases::Vec3;
use crate::ray::Ray;
use crate::util::{max_vec3, min_vec3};
use itertools::iproduct;

/// Axis-aligned bounding box.
#[derive(Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: &Vec3, max: &Vec3) -> Self {
        Aabb {
            min: *min,
            max: *max,
        }
    }
    pub fn empty() -> Self {
        Aabb {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1] || self.min[2] > self.max[2]
    }
    /// Slab test over the interval (t_min, t_max).
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
        let mut t_near = t_min;
        let mut t_far = t_max;
        for axis in 0..3 {
            let inv_d = 1.0 / ray.direction[axis];
            let mut t0 = (self.min[axis] - ray.origin[axis]) * inv_d;
            let mut t1 = (self.max[axis] - ray.origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = f32::max(t_near, t0);
            t_far = f32::min(t_far, t1);
            if t_near > t_far {
                return false;
            }
        }
        true
    }
    pub fn unite(lhs: &Aabb, rhs: &Aabb) -> Aabb {
        Aabb::new(
            &min_vec3(&lhs.min, &rhs.min),
            &max_vec3(&lhs.max, &rhs.max),
        )
    }
    pub fn grow(&mut self, point: &Vec3) {
        self.min = min_vec3(&self.min, point);
        self.max = max_vec3(&self.max, point);
    }
    pub fn corners(&self) -> Vec<Vec3> {
        let bounds = [&self.min, &self.max];
        iproduct!(0..2, 0..2, 0..2)
            .map(|(ix, iy, iz)| Vec3::new(bounds[ix][0], bounds[iy][1], bounds[iz][2]))
            .collect()
    }
    pub fn transformed(&self, tr: &Affine) -> Aabb {
        if self.is_empty() {
            return Aabb::empty();
        }
        let mut ret = Aabb::empty();
        for corner in self.corners() {
            ret.grow(&tr.apply_point(&corner));
        }
        ret
    }
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let d = self.max - self.min;
        2.0 * (d[0] * d[1] + d[1] * d[2] + d[2] * d[0])
    }
    pub fn center_cmp(&self, rhs: &Aabb, axis: usize) -> std::cmp::Ordering {
        let lhs_center = 0.5 * (self.min[axis] + self.max[axis]);
        let rhs_center = 0.5 * (rhs.min[axis] + rhs.max[axis]);
        lhs_center
            .partial_cmp(&rhs_center)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
