use crate::aabb::Aabb;
use crate::hit_record::HitRecord;
use crate::hitable::empty::Empty;
use crate::hitable::hitable_list::HitableList;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

/// Binary bounding-volume hierarchy built by the surface-area heuristic.
pub struct BvhNode {
    left: Arc<dyn Hitable>,
    right: Arc<dyn Hitable>,
    /// splitting axis, used to order the traversal
    axis: usize,
    bbox: Aabb,
}

impl BvhNode {
    /// Every element of `list` must have a bounding box; time_0 and time_1
    /// bound the boxes of moving geometry.
    pub fn new(mut list: Vec<Arc<dyn Hitable>>, time_0: f32, time_1: f32) -> Self {
        if list.len() <= 1 {
            let left: Arc<dyn Hitable> = match list.pop() {
                Some(only) => only,
                None => Arc::new(Empty::new()),
            };
            let bbox = left.bounding_box(time_0, time_1).unwrap();
            return BvhNode {
                left,
                right: Arc::new(Empty::new()),
                axis: 0,
                bbox,
            };
        }
        let mut bboxes: Vec<Aabb> = list
            .iter()
            .map(|obj| obj.bounding_box(time_0, time_1).unwrap())
            .collect();
        let (axis, split) = Self::best_split(&mut bboxes);
        let (left, right): (Arc<dyn Hitable>, Arc<dyn Hitable>) = if split == 0 {
            // no split beats keeping the group together
            (Arc::new(HitableList::new(list)), Arc::new(Empty::new()))
        } else {
            list.sort_unstable_by(|a, b| {
                let a_box = a.bounding_box(time_0, time_1).unwrap();
                let b_box = b.bounding_box(time_0, time_1).unwrap();
                a_box.center_cmp(&b_box, axis)
            });
            let tail = list.split_off(split);
            (
                Arc::new(BvhNode::new(list, time_0, time_1)),
                Arc::new(BvhNode::new(tail, time_0, time_1)),
            )
        };
        let bbox = Aabb::unite(
            &left.bounding_box(time_0, time_1).unwrap(),
            &right.bounding_box(time_0, time_1).unwrap(),
        );
        BvhNode {
            left,
            right,
            axis,
            bbox,
        }
    }

    /// Picks (axis, index) minimizing the SAH cost
    /// |left bbox| * left count + |right bbox| * right count.
    /// Index 0 means no split improved on the whole group.
    fn best_split(bboxes: &mut Vec<Aabb>) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_cost = f32::MAX;
        for axis in 0..3 {
            bboxes.sort_unstable_by(|a, b| a.center_cmp(b, axis));
            let areas = Self::split_areas(bboxes);
            for (i, (area_left, area_right)) in areas.iter().enumerate().take(bboxes.len()) {
                let cost = area_left * i as f32 + area_right * (bboxes.len() - i) as f32;
                if cost < best_cost {
                    best = (axis, i);
                    best_cost = cost;
                }
            }
        }
        best
    }

    /// For every split index i, the surface areas of the union of the
    /// first i boxes and of the remaining ones.
    fn split_areas(bboxes: &[Aabb]) -> Vec<(f32, f32)> {
        let n = bboxes.len();
        let mut areas = vec![(0.0, 0.0); n + 1];
        let mut front = Aabb::empty();
        let mut back = Aabb::empty();
        for i in 0..n {
            front = Aabb::unite(&front, &bboxes[i]);
            back = Aabb::unite(&back, &bboxes[n - i - 1]);
            areas[i + 1].0 = front.area();
            areas[n - i - 1].1 = back.area();
        }
        areas
    }
}

impl Hitable for BvhNode {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        if !self.bbox.hit(ray, t_min, t_max) {
            return None;
        }
        // visit the child on the near side of the split first
        let (first, second) = if ray.direction[self.axis] >= 0.0 {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };
        match first.hit(ray, t_min, t_max) {
            Some(near) => Some(second.hit(ray, t_min, near.t).unwrap_or(near)),
            None => second.hit(ray, t_min, t_max),
        }
    }
    fn bounding_box(&self, _time_0: f32, _time_1: f32) -> Option<Aabb> {
        Some(self.bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{RandGen, Vec3};
    use crate::hitable::sphere::Sphere;
    use crate::material::Material;
    use crate::texture::Texture;
    use rand::Rng;
    use rand::SeedableRng;

    #[test]
    fn agrees_with_the_flat_list() {
        let material = Arc::new(Material::Lambertian {
            albedo: Texture::rgb(0.5, 0.5, 0.5),
        });
        let mut rng = RandGen::seed_from_u64(29);
        let mut objs: Vec<Arc<dyn Hitable>> = Vec::new();
        for _ in 0..50 {
            let center = Vec3::new(
                10.0 * rng.gen::<f32>() - 5.0,
                10.0 * rng.gen::<f32>() - 5.0,
                10.0 * rng.gen::<f32>() - 5.0,
            );
            let radius = 0.1 + 0.5 * rng.gen::<f32>();
            objs.push(Arc::new(Sphere::new(&center, radius, material.clone())));
        }
        let flat = HitableList::new(objs.clone());
        let bvh = BvhNode::new(objs, 0.0, 1.0);
        for _ in 0..300 {
            let origin = Vec3::new(
                20.0 * rng.gen::<f32>() - 10.0,
                20.0 * rng.gen::<f32>() - 10.0,
                -15.0,
            );
            let target = Vec3::new(
                10.0 * rng.gen::<f32>() - 5.0,
                10.0 * rng.gen::<f32>() - 5.0,
                10.0 * rng.gen::<f32>() - 5.0,
            );
            let ray = Ray::new(&origin, &(target - origin), 0.0);
            let expected = flat.hit(&ray, 1e-3, f32::MAX);
            let got = bvh.hit(&ray, 1e-3, f32::MAX);
            match (&expected, &got) {
                (None, None) => {}
                (Some(a), Some(b)) => assert!((a.t - b.t).abs() < 1e-5),
                _ => panic!("bvh and flat list disagree"),
            }
        }
    }

    #[test]
    fn empty_input_never_hits() {
        let bvh = BvhNode::new(Vec::new(), 0.0, 1.0);
        let ray = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(bvh.hit(&ray, 1e-3, f32::MAX).is_none());
    }
}
