use crate::aliases::Vec3;
use crate::pdf::Pdf;
use crate::ray::Ray;

/// Outcome of a successful scatter attempt.
pub enum ScatterRecord {
    /// Deterministic mirror-like continuation, sampled with probability 1
    /// along one exact direction; no density correction applies.
    Specular { attenuation: Vec3, ray: Ray },
    /// Probabilistic continuation. The pdf is the distribution the material
    /// itself would prefer to sample from; the estimator decides how the
    /// direction is actually drawn.
    Diffuse {
        attenuation: Vec3,
        pdf: Pdf<'static>,
    },
}
