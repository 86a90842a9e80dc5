use crate::aliases::Vec3;

/// Orthonormal basis with w aligned to a chosen direction.
pub struct Onb {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Onb {
    /// Builds a basis whose w axis points along `w_dir`.
    /// `w_dir` need not be normalized.
    pub fn from_w(w_dir: &Vec3) -> Self {
        let w = w_dir.normalize();
        // any axis not almost parallel to w will do as a helper
        let helper = if w[0].abs() > 0.9 {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(1.0, 0.0, 0.0)
        };
        let v = w.cross(&helper).normalize();
        let u = v.cross(&w);
        Onb { u, v, w }
    }
    /// Maps local (u,v,w) coordinates into the global frame.
    pub fn to_global(&self, local: &Vec3) -> Vec3 {
        local[0] * self.u + local[1] * self.v + local[2] * self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        for w_dir in &[
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-0.3, 2.0, 0.7),
        ] {
            let onb = Onb::from_w(w_dir);
            assert!((onb.u.norm() - 1.0).abs() < 1e-6);
            assert!((onb.v.norm() - 1.0).abs() < 1e-6);
            assert!((onb.w.norm() - 1.0).abs() < 1e-6);
            assert!(onb.u.dot(&onb.v).abs() < 1e-6);
            assert!(onb.v.dot(&onb.w).abs() < 1e-6);
            assert!(onb.w.dot(&onb.u).abs() < 1e-6);
            assert!((onb.w - w_dir.normalize()).norm() < 1e-6);
        }
    }
}
