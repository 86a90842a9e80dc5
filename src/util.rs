use crate::aliases::Vec3;

pub fn zip_vec3(lhs: &Vec3, rhs: &Vec3, zipper: impl Fn(f32, f32) -> f32) -> Vec3 {
    Vec3::new(
        zipper(lhs[0], rhs[0]),
        zipper(lhs[1], rhs[1]),
        zipper(lhs[2], rhs[2]),
    )
}

pub fn min_vec3(lhs: &Vec3, rhs: &Vec3) -> Vec3 {
    zip_vec3(lhs, rhs, f32::min)
}

pub fn max_vec3(lhs: &Vec3, rhs: &Vec3) -> Vec3 {
    zip_vec3(lhs, rhs, f32::max)
}
