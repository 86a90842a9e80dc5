use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::pdf::{rnd_in_unit_sphere, Pdf};
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::Texture;
use rand::Rng;
use std::f32::consts::PI;

/// Closed set of surface materials. The estimator depends only on the
/// three operations below, never on the concrete kind.
pub enum Material {
    Lambertian { albedo: Texture },
    Metal { albedo: Vec3, fuzziness: f32 },
    Dielectric { ref_idx: f32 },
    DiffuseLight { emit: Texture },
}

impl Material {
    /// Light emitted at the hit point, independent of incoming light.
    /// Emitters are one-sided: the back face stays dark.
    pub fn emitted(&self, _ray: &Ray, rec: &HitRecord) -> Vec3 {
        match self {
            Material::DiffuseLight { emit } => {
                if rec.front_face {
                    emit.value(&rec.tex_coord, &rec.point)
                } else {
                    Vec3::zeros()
                }
            }
            _ => Vec3::zeros(),
        }
    }

    /// Attempts to continue the path. None means the surface absorbs the
    /// ray entirely.
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        match self {
            Material::Lambertian { albedo } => Some(ScatterRecord::Diffuse {
                attenuation: albedo.value(&rec.tex_coord, &rec.point),
                pdf: Pdf::cosine(&rec.normal),
            }),
            Material::Metal { albedo, fuzziness } => {
                let mut reflected = reflect(&ray.direction, &rec.normal);
                if *fuzziness > 0.0 {
                    reflected = reflected.normalize() + *fuzziness * rnd_in_unit_sphere(rng);
                    if reflected.dot(&rec.normal) <= 0.0 {
                        // fuzz pushed the ray under the surface
                        return None;
                    }
                }
                Some(ScatterRecord::Specular {
                    attenuation: *albedo,
                    ray: Ray::new(&rec.point, &reflected, ray.time),
                })
            }
            Material::Dielectric { ref_idx } => {
                let ratio = if rec.front_face {
                    1.0 / ref_idx
                } else {
                    *ref_idx
                };
                let unit_dir = ray.direction.normalize();
                let cosine = (-unit_dir).dot(&rec.normal).min(1.0);
                let dir = match refract(&unit_dir, &rec.normal, ratio) {
                    Some(refracted) if rng.gen::<f32>() >= schlick(cosine, ratio) => refracted,
                    _ => reflect(&unit_dir, &rec.normal),
                };
                Some(ScatterRecord::Specular {
                    attenuation: Vec3::new(1.0, 1.0, 1.0),
                    ray: Ray::new(&rec.point, &dir, ray.time),
                })
            }
            Material::DiffuseLight { .. } => None,
        }
    }

    /// Density of this material's own scattering distribution at an
    /// already chosen outgoing ray. The direction may have been drawn from
    /// a different distribution entirely; this density is the numerator
    /// that keeps such estimates consistent.
    pub fn scattering_pdf(&self, _ray: &Ray, rec: &HitRecord, scattered: &Ray) -> f32 {
        match self {
            Material::Lambertian { .. } => {
                let cosine = rec.normal.dot(&scattered.direction.normalize());
                (cosine / PI).max(0.0)
            }
            _ => 0.0,
        }
    }
}

/// `n` must be normalized.
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refraction of the (normalized) direction through a surface with the
/// given index ratio. None on total internal reflection.
pub fn refract(unit_v: &Vec3, n: &Vec3, ratio: f32) -> Option<Vec3> {
    let dt = unit_v.dot(n);
    let disc = 1.0 - ratio * ratio * (1.0 - dt * dt);
    if disc > 0.0 {
        Some(ratio * (unit_v - n * dt) - *n * disc.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation of the reflection probability.
pub fn schlick(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Vec2;
    use rand::SeedableRng;

    fn record<'a>(normal: Vec3, front_face: bool, material: &'a Material) -> HitRecord<'a> {
        HitRecord {
            t: 1.0,
            point: Vec3::zeros(),
            tex_coord: Vec2::zeros(),
            normal,
            front_face,
            material,
        }
    }

    #[test]
    fn reflect_mirrors_about_the_normal() {
        let out = reflect(&Vec3::new(1.0, -1.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(out, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refraction_is_straight_through_at_normal_incidence() {
        let refracted = refract(
            &Vec3::new(0.0, -1.0, 0.0),
            &Vec3::new(0.0, 1.0, 0.0),
            1.0 / 1.5,
        )
        .unwrap();
        assert!((refracted - Vec3::new(0.0, -1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn refraction_fails_beyond_the_critical_angle() {
        // leaving glass at a grazing angle
        let grazing = Vec3::new(1.0, -0.1, 0.0).normalize();
        assert!(refract(&grazing, &Vec3::new(0.0, 1.0, 0.0), 1.5).is_none());
    }

    #[test]
    fn schlick_reaches_total_reflection_at_grazing() {
        assert!((schlick(0.0, 1.5) - 1.0).abs() < 1e-6);
        assert!(schlick(1.0, 1.5) < 0.05);
    }

    #[test]
    fn metal_scatters_the_exact_reflection() {
        let metal = Material::Metal {
            albedo: Vec3::new(0.8, 0.8, 0.8),
            fuzziness: 0.0,
        };
        let rec = record(Vec3::new(0.0, 1.0, 0.0), true, &metal);
        let ray = Ray::new(&Vec3::new(0.0, 1.0, -1.0), &Vec3::new(0.0, -1.0, 1.0), 0.25);
        let mut rng = RandGen::seed_from_u64(1);
        match metal.scatter(&ray, &rec, &mut rng) {
            Some(ScatterRecord::Specular { attenuation, ray: scattered }) => {
                assert_eq!(scattered.direction, Vec3::new(0.0, 1.0, 1.0));
                assert_eq!(attenuation, Vec3::new(0.8, 0.8, 0.8));
                assert_eq!(scattered.time, 0.25);
            }
            _ => panic!("metal must scatter specularly"),
        }
    }

    #[test]
    fn lambertian_density_is_cosine_over_pi() {
        let lambertian = Material::Lambertian {
            albedo: Texture::rgb(0.5, 0.5, 0.5),
        };
        let rec = record(Vec3::new(0.0, 1.0, 0.0), true, &lambertian);
        let incoming = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let diagonal = Ray::new(&Vec3::zeros(), &Vec3::new(1.0, 1.0, 0.0), 0.0);
        let density = lambertian.scattering_pdf(&incoming, &rec, &diagonal);
        let expected = (0.5f32.sqrt()) / PI;
        assert!((density - expected).abs() < 1e-6);
        let below = Ray::new(&Vec3::zeros(), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        assert_eq!(lambertian.scattering_pdf(&incoming, &rec, &below), 0.0);
    }

    #[test]
    fn emitters_are_one_sided_and_absorb() {
        let light = Material::DiffuseLight {
            emit: Texture::rgb(4.0, 4.0, 4.0),
        };
        let ray = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1.0, 0.0), 0.0);
        let front = record(Vec3::new(0.0, 1.0, 0.0), true, &light);
        assert_eq!(light.emitted(&ray, &front), Vec3::new(4.0, 4.0, 4.0));
        let back = record(Vec3::new(0.0, 1.0, 0.0), false, &light);
        assert_eq!(light.emitted(&ray, &back), Vec3::zeros());
        let mut rng = RandGen::seed_from_u64(2);
        assert!(light.scatter(&ray, &front, &mut rng).is_none());
    }
}
