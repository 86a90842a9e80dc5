use crate::aliases::{Vec2, Vec3};
use std::f32::consts::PI;

/// Closed set of texture kinds. (u,v) addresses 2d lookups, p 3d ones.
pub enum Texture {
    Constant(Vec3),
    Checker {
        even: Box<Texture>,
        odd: Box<Texture>,
        /// edge length of one checker cell
        length: f32,
    },
}

impl Texture {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Texture::Constant(Vec3::new(r, g, b))
    }
    pub fn checker(even: Texture, odd: Texture, length: f32) -> Self {
        Texture::Checker {
            even: Box::new(even),
            odd: Box::new(odd),
            length,
        }
    }
    pub fn value(&self, uv: &Vec2, p: &Vec3) -> Vec3 {
        match self {
            Texture::Constant(color) => *color,
            Texture::Checker { even, odd, length } => {
                let x = p * (PI / length);
                let sines = x[0].sin() * x[1].sin() * x[2].sin();
                if sines < 0.0 {
                    odd.value(uv, p)
                } else {
                    even.value(uv, p)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_alternates_between_cells() {
        let tex = Texture::checker(Texture::rgb(1.0, 1.0, 1.0), Texture::rgb(0.0, 0.0, 0.0), 1.0);
        let uv = Vec2::zeros();
        let a = tex.value(&uv, &Vec3::new(0.5, 0.5, 0.5));
        let b = tex.value(&uv, &Vec3::new(1.5, 0.5, 0.5));
        assert_eq!(a, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(b, Vec3::new(0.0, 0.0, 0.0));
    }
}
