mod cornellbox;
mod spheres;

use candela::scene::Scene;
use std::str::FromStr;

#[derive(Clone, Copy)]
pub enum SceneKind {
    CornellBox,
    Spheres,
}

impl FromStr for SceneKind {
    type Err = anyhow::Error;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "cornell" | "cornell-box" => Ok(SceneKind::CornellBox),
            "spheres" => Ok(SceneKind::Spheres),
            other => Err(anyhow::anyhow!(
                "unknown scene '{}' (expected cornell or spheres)",
                other
            )),
        }
    }
}

pub fn build(kind: SceneKind, aspect_ratio: f32) -> Scene {
    match kind {
        SceneKind::CornellBox => cornellbox::scene(aspect_ratio),
        SceneKind::Spheres => spheres::scene(aspect_ratio),
    }
}
