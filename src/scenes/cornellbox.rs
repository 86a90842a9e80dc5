use candela::affine::Affine;
use candela::aliases::Vec3;
use candela::background::Ambient;
use candela::camera::Camera;
use candela::hitable::bvh_node::BvhNode;
use candela::hitable::cuboid;
use candela::hitable::rectangle::Rectangle;
use candela::hitable::sphere::Sphere;
use candela::hitable::transform::Transform;
use candela::hitable::Hitable;
use candela::material::Material;
use candela::scene::Scene;
use candela::texture::Texture;
use std::sync::Arc;

/// The Cornell box: colored walls, one ceiling light, an aluminum box and
/// a glass sphere. The light and the sphere double as sampling targets.
pub fn scene(aspect_ratio: f32) -> Scene {
    let red = Arc::new(Material::Lambertian {
        albedo: Texture::rgb(0.65, 0.05, 0.05),
    });
    let white = Arc::new(Material::Lambertian {
        albedo: Texture::rgb(0.73, 0.73, 0.73),
    });
    let green = Arc::new(Material::Lambertian {
        albedo: Texture::rgb(0.12, 0.45, 0.15),
    });
    let light_material = Arc::new(Material::DiffuseLight {
        emit: Texture::rgb(15.0, 15.0, 15.0),
    });

    let mut objs: Vec<Arc<dyn Hitable>> = Vec::new();
    // green wall at x = 555, red wall at x = 0
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        green,
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 0.0),
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        red,
    )));
    // floor, ceiling, back wall
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 0.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 555.0, 0.0),
        white,
    )));
    // ceiling light; the edge winding points its face down into the box
    let light: Arc<dyn Hitable> = Arc::new(Rectangle::new(
        &Vec3::new(213.0, 554.0, 227.0),
        &Vec3::new(130.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 105.0),
        light_material,
    ));
    objs.push(light.clone());
    // tall aluminum box, rotated then moved into the back half
    let aluminum = Arc::new(Material::Metal {
        albedo: Vec3::new(0.8, 0.85, 0.88),
        fuzziness: 0.0,
    });
    let placement = Affine::rotation(&Vec3::new(0.0, 15.0f32.to_radians(), 0.0), &Vec3::zeros())
        .then(&Affine::translation(&Vec3::new(265.0, 0.0, 295.0)));
    objs.push(Arc::new(Transform::new(
        Arc::new(cuboid(&Vec3::new(165.0, 330.0, 165.0), aluminum)),
        &placement,
        0.0,
        1.0,
    )));
    // glass sphere in the front half
    let glass: Arc<dyn Hitable> = Arc::new(Sphere::new(
        &Vec3::new(190.0, 90.0, 190.0),
        90.0,
        Arc::new(Material::Dielectric { ref_idx: 1.5 }),
    ));
    objs.push(glass.clone());

    let camera = Camera::new(
        &Vec3::new(278.0, 278.0, -800.0),
        &Vec3::new(278.0, 278.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect_ratio,
        0.0, // pinhole
        10.0,
        0.0,
        1.0,
    );
    Scene::new(
        Arc::new(BvhNode::new(objs, 0.0, 1.0)),
        vec![light, glass],
        camera,
        Arc::new(Ambient::new(&Vec3::zeros())),
    )
}
