use crate::aliases::{RandGen, Vec3};
use crate::pdf::rnd_in_unit_disc;
use crate::ray::Ray;
use rand::Rng;
use std::f32::consts::PI;

/// Thin-lens look-at camera. Rays carry a time drawn uniformly from the
/// shutter interval.
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lens_radius: f32,
    u: Vec3, // unit vector pointing right
    v: Vec3, // unit vector pointing up
    time_0: f32,
    time_1: f32,
}

impl Camera {
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f32,   // vertical field of view, degrees
        aspect: f32, // width over height
        lens_radius: f32,
        focus_dist: f32,
        time_0: f32, // shutter open
        time_1: f32, // shutter close
    ) -> Self {
        let theta = vfov * PI / 180.0;
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let w = (look_from - look_at).normalize();
        let u = view_up.cross(&w).normalize();
        let v = w.cross(&u);
        let origin = *look_from;
        Camera {
            origin,
            lower_left_corner: origin - focus_dist * (half_width * u + half_height * v + w),
            horizontal: 2.0 * focus_dist * half_width * u,
            vertical: 2.0 * focus_dist * half_height * v,
            lens_radius,
            u,
            v,
            time_0,
            time_1,
        }
    }
    /// Ray through film coordinates (s, t) in [0,1]^2, jittered over the
    /// lens disc and the shutter interval.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut RandGen) -> Ray {
        let lens = self.lens_radius * rnd_in_unit_disc(rng);
        let offset = lens.x * self.u + lens.y * self.v;
        let time = self.time_0 + rng.gen::<f32>() * (self.time_1 - self.time_0);
        Ray::new(
            &(self.origin + offset),
            &(self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset),
            time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn center_ray_points_at_the_look_target() {
        let camera = Camera::new(
            &Vec3::new(0.0, 0.0, 2.0),
            &Vec3::new(0.0, 0.0, -1.0),
            &Vec3::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
            0.0, // pinhole
            3.0,
            0.0,
            1.0,
        );
        let mut rng = RandGen::seed_from_u64(13);
        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 2.0)).norm() < 1e-6);
        assert!((ray.direction.normalize() - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
        assert!(0.0 <= ray.time && ray.time <= 1.0);
    }
}
