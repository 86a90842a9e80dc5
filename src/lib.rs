pub mod aabb;
pub mod affine;
pub mod aliases;
pub mod background;
pub mod camera;
pub mod hit_record;
pub mod hitable;
pub mod material;
pub mod onb;
pub mod pdf;
pub mod ray;
pub mod scatter_record;
pub mod scene;
pub mod texture;
pub mod util;

use crate::aliases::{RandGen, Vec3};
use crate::pdf::Pdf;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::scene::Scene;

/// Lower bound of every intersection query; excludes self-intersection at
/// the continuation ray's origin.
const T_MIN: f32 = 1e-3;

/// Densities at or below this are treated as zero and the contribution is
/// skipped. Dividing that close to the edge of the support only amplifies
/// floating-point noise.
const MIN_DENSITY: f32 = 1e-6;

/// One-sample Monte Carlo estimate of the radiance arriving along `ray`.
///
/// Scattering directions are drawn from a 50/50 mixture of the scene's
/// light targets and the material's own distribution, and the contribution
/// is weighted by the material density over the mixture density, so the
/// estimate stays unbiased no matter which half produced the direction.
/// `depth` bounds the path length; exhausting it returns black.
pub fn radiance(ray: &Ray, scene: &Scene, rng: &mut RandGen, depth: i32) -> Vec3 {
    if depth <= 0 {
        return Vec3::zeros();
    }
    let rec = match scene.hitables.hit(ray, T_MIN, f32::MAX) {
        Some(rec) => rec,
        None => return scene.background.color(ray),
    };
    let emitted = rec.material.emitted(ray, &rec);
    let srec = match rec.material.scatter(ray, &rec, rng) {
        Some(srec) => srec,
        None => return emitted, // absorbed
    };
    match srec {
        ScatterRecord::Specular {
            attenuation,
            ray: specular_ray,
        } => {
            // emission still counts at a specular hit
            emitted
                + attenuation.component_mul(&radiance(&specular_ray, scene, rng, depth - 1))
        }
        ScatterRecord::Diffuse {
            attenuation,
            pdf: material_pdf,
        } => {
            let (dir, density) = match scene.light_targets() {
                Some(lights) => {
                    let light_pdf = Pdf::hitable(lights, &rec.point);
                    let mixed = Pdf::mixture(&light_pdf, &material_pdf);
                    let dir = mixed.generate(rng);
                    (dir, mixed.density(&dir))
                }
                None => {
                    let dir = material_pdf.generate(rng);
                    (dir, material_pdf.density(&dir))
                }
            };
            if density <= MIN_DENSITY {
                return emitted;
            }
            let scattered = Ray::new(&rec.point, &dir, ray.time);
            let scattering = rec.material.scattering_pdf(ray, &rec, &scattered);
            if scattering <= 0.0 {
                return emitted;
            }
            let incoming = radiance(&scattered, scene, rng, depth - 1);
            emitted + (scattering / density) * attenuation.component_mul(&incoming)
        }
    }
}
