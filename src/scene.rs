use crate::background::Background;
use crate::camera::Camera;
use crate::hitable::hitable_list::HitableList;
use crate::hitable::Hitable;
use std::sync::Arc;

/// Read-only bundle shared by every sample of a frame. Never mutated while
/// rendering, so worker threads borrow it freely.
pub struct Scene {
    pub hitables: Arc<dyn Hitable>,
    lights: Option<Arc<dyn Hitable>>,
    pub camera: Camera,
    pub background: Arc<dyn Background>,
}

impl Scene {
    /// An empty `lights` vector disables light-importance sampling rather
    /// than producing a sampling target of zero density.
    pub fn new(
        hitables: Arc<dyn Hitable>,
        mut lights: Vec<Arc<dyn Hitable>>,
        camera: Camera,
        background: Arc<dyn Background>,
    ) -> Self {
        let lights = match lights.len() {
            0 => None,
            1 => lights.pop(),
            _ => Some(Arc::new(HitableList::new(lights)) as Arc<dyn Hitable>),
        };
        Scene {
            hitables,
            lights,
            camera,
            background,
        }
    }
    /// Sampling targets for direct light sampling, if any.
    pub fn light_targets(&self) -> Option<&dyn Hitable> {
        self.lights.as_deref()
    }
}
