use crate::aliases::Vec3;
use crate::ray::Ray;

/// Radiance arriving along rays that leave the scene.
pub trait Background: Send + Sync {
    fn color(&self, ray: &Ray) -> Vec3;
}

/// Constant miss color.
pub struct Ambient {
    color: Vec3,
}

impl Ambient {
    pub fn new(color: &Vec3) -> Self {
        Self { color: *color }
    }
}

impl Background for Ambient {
    fn color(&self, _ray: &Ray) -> Vec3 {
        self.color
    }
}

/// Light arriving from one direction, falling off with the cosine.
pub struct Directional {
    direction: Vec3, // normalized
    color: Vec3,
}

impl Directional {
    pub fn new(direction: &Vec3, color: &Vec3) -> Self {
        Self {
            direction: direction.normalize(),
            color: *color,
        }
    }
}

impl Background for Directional {
    fn color(&self, ray: &Ray) -> Vec3 {
        ray.direction.normalize().dot(&self.direction).max(0.0) * self.color
    }
}
