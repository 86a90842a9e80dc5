use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
pub type Mat3 = na::Matrix3<f32>;

/// The generator every sampling call receives explicitly. Seedable, so a
/// render is reproducible from its base seed and tests are deterministic.
pub type RandGen = rand::rngs::SmallRng;
