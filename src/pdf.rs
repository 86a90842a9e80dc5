use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hitable::Hitable;
use crate::onb::Onb;
use rand::Rng;
use std::f32::consts::PI;

/// Probability distribution over directions, closed over the kinds the
/// estimator knows. The mixture borrows its constituents; they only need
/// to outlive one estimate.
pub enum Pdf<'a> {
    /// Cosine-weighted hemisphere around the basis' w axis.
    Cosine(Onb),
    /// Solid-angle distribution of directions from `origin` toward
    /// `target` (one geometry or a whole light collection).
    Hitable { origin: Vec3, target: &'a dyn Hitable },
    /// Unbiased 50/50 mixture of two distributions.
    Mixture(&'a Pdf<'a>, &'a Pdf<'a>),
}

impl<'a> Pdf<'a> {
    pub fn cosine(w: &Vec3) -> Pdf<'static> {
        Pdf::Cosine(Onb::from_w(w))
    }
    pub fn hitable(target: &'a dyn Hitable, origin: &Vec3) -> Pdf<'a> {
        Pdf::Hitable {
            origin: *origin,
            target,
        }
    }
    pub fn mixture(a: &'a Pdf<'a>, b: &'a Pdf<'a>) -> Pdf<'a> {
        Pdf::Mixture(a, b)
    }

    /// Probability density at a direction. `dir` need not be normalized.
    pub fn density(&self, dir: &Vec3) -> f32 {
        match self {
            Pdf::Cosine(basis) => {
                let cosine = dir.normalize().dot(&basis.w);
                // integral of cos over the hemisphere is pi
                (cosine / PI).max(0.0)
            }
            Pdf::Hitable { origin, target } => target.direction_density(origin, dir),
            Pdf::Mixture(a, b) => 0.5 * (a.density(dir) + b.density(dir)),
        }
    }

    /// Draws a random direction following this distribution.
    pub fn generate(&self, rng: &mut RandGen) -> Vec3 {
        match self {
            Pdf::Cosine(basis) => basis.to_global(&random_cosine_direction(rng)),
            Pdf::Hitable { origin, target } => target.random_direction_from(origin, rng),
            Pdf::Mixture(a, b) => {
                if rng.gen::<f32>() < 0.5 {
                    a.generate(rng)
                } else {
                    b.generate(rng)
                }
            }
        }
    }
}

/// Uniform random point inside the unit ball, by rejection.
pub fn rnd_in_unit_sphere(rng: &mut RandGen) -> Vec3 {
    loop {
        let p = Vec3::new(
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
        );
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform random point inside the unit disc, by rejection.
pub fn rnd_in_unit_disc(rng: &mut RandGen) -> Vec2 {
    loop {
        let p = Vec2::new(2.0 * rng.gen::<f32>() - 1.0, 2.0 * rng.gen::<f32>() - 1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

/// Random direction on the unit hemisphere (z >= 0) with density
/// proportional to the cosine of the angle to (0,0,1).
pub fn random_cosine_direction(rng: &mut RandGen) -> Vec3 {
    let r0 = rng.gen::<f32>();
    let r1 = rng.gen::<f32>();
    let radius = r0.sqrt();
    let phi = 2.0 * PI * r1;
    let z = (1.0 - r0).sqrt();
    Vec3::new(phi.cos() * radius, phi.sin() * radius, z)
}

/// Uniform random (normalized) direction inside the cone around (0,0,1)
/// whose half angle has the given cosine. -1 yields the whole sphere.
pub fn random_in_cone(cos_half_angle: f32, rng: &mut RandGen) -> Vec3 {
    let r0 = rng.gen::<f32>();
    let r1 = rng.gen::<f32>();
    let z = 1.0 + r0 * (cos_half_angle - 1.0);
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r1;
    Vec3::new(phi.cos() * sine, phi.sin() * sine, z)
}
