use candela::aliases::Vec3;
use candela::background::Ambient;
use candela::camera::Camera;
use candela::hitable::bvh_node::BvhNode;
use candela::hitable::sphere::{MovingSphere, Sphere};
use candela::hitable::Hitable;
use candela::material::Material;
use candela::scene::Scene;
use candela::texture::Texture;
use std::sync::Arc;

/// Sky-lit demo: checker ground, a moving diffuse sphere, metal and glass.
/// No light list, so every bounce samples the material distribution alone.
pub fn scene(aspect_ratio: f32) -> Scene {
    let ground = Arc::new(Material::Lambertian {
        albedo: Texture::checker(
            Texture::rgb(0.2, 0.3, 0.1),
            Texture::rgb(0.9, 0.9, 0.9),
            1.0,
        ),
    });
    let mut objs: Vec<Arc<dyn Hitable>> = Vec::new();
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::Dielectric { ref_idx: 1.5 }),
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::Metal {
            albedo: Vec3::new(0.7, 0.6, 0.5),
            fuzziness: 0.05,
        }),
    )));
    objs.push(Arc::new(MovingSphere::new(
        &Vec3::new(-4.0, 1.0, 0.0),
        &Vec3::new(-4.0, 1.3, 0.0),
        1.0,
        Arc::new(Material::Lambertian {
            albedo: Texture::rgb(0.4, 0.2, 0.1),
        }),
    )));

    let camera = Camera::new(
        &Vec3::new(13.0, 2.0, 3.0),
        &Vec3::new(0.0, 0.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.05,
        10.0,
        0.0,
        1.0,
    );
    Scene::new(
        Arc::new(BvhNode::new(objs, 0.0, 1.0)),
        Vec::new(),
        camera,
        Arc::new(Ambient::new(&Vec3::new(0.7, 0.8, 1.0))),
    )
}
