use std::{path::PathBuf, sync::Arc};

use whitted::{
    Camera, ImageFileBuffer, RenderSettings, Scene,
    geometry::{ScreenSize, WorldPoint, WorldVector},
    render_with_progress,
    scene::{Diffuse, Light, Material, Primitive},
    util::{Colour, WHITE},
};

use indicatif::ProgressBar;
use log::info;

fn demo_scene() -> anyhow::Result<Scene> {
    let camera = Camera::builder()
        .center(WorldPoint::new(0.0, 1.5, 6.0))
        .forward(WorldVector::new(0.0, -0.2, -1.0))
        .up(WorldVector::new(0.0, 1.0, 0.0))
        .resolution(ScreenSize::new(800, 600))
        .film_width(36e-3)
        .focal_length(35e-3)
        .build()?;

    let floor = Arc::new(
        Material::builder()
            .ambient(Colour::new(0.05, 0.05, 0.05))
            .diffuse(Diffuse::Checker {
                even: Colour::new(0.8, 0.8, 0.8),
                odd: Colour::new(0.1, 0.1, 0.1),
                scale: 1.0,
            })
            .specular(Colour::new(0.2, 0.2, 0.2))
            .shininess(20.0)
            .reflection(0.3)
            .build(),
    );
    let glossy = |colour: Colour, reflection| {
        Arc::new(
            Material::builder()
                .ambient(colour * 0.1)
                .diffuse(colour)
                .specular(Colour::new(0.6, 0.6, 0.6))
                .shininess(50.0)
                .reflection(reflection)
                .build(),
        )
    };
    let stripes = Arc::new(
        Material::builder()
            .ambient(Colour::new(0.05, 0.05, 0.0))
            .diffuse(Diffuse::Procedural(Arc::new(|point: &WorldPoint| {
                if (point.y * 4.0).floor().rem_euclid(2.0) == 0.0 {
                    Colour::new(0.9, 0.7, 0.1)
                } else {
                    Colour::new(0.4, 0.2, 0.0)
                }
            })))
            .build(),
    );

    let primitives = vec![
        Primitive::quad(
            WorldPoint::new(-8.0, 0.0, 8.0),
            WorldPoint::new(8.0, 0.0, 8.0),
            WorldPoint::new(8.0, 0.0, -8.0),
            WorldPoint::new(-8.0, 0.0, -8.0),
            floor,
        ),
        Primitive::sphere(
            WorldPoint::new(0.0, 1.0, 0.0),
            1.0,
            glossy(Colour::new(0.9, 0.1, 0.1), 0.2),
        ),
        Primitive::sphere(
            WorldPoint::new(-2.2, 0.7, 0.8),
            0.7,
            glossy(Colour::new(0.1, 0.3, 0.9), 0.5),
        ),
        Primitive::sphere(WorldPoint::new(2.0, 0.6, 1.2), 0.6, glossy(WHITE * 0.2, 0.8)),
        Primitive::triangle(
            WorldPoint::new(1.0, 0.0, -2.5),
            WorldPoint::new(4.0, 0.0, -2.0),
            WorldPoint::new(2.5, 3.0, -2.2),
            stripes,
        ),
    ];

    let lights = vec![
        Light::new(
            WorldPoint::new(-4.0, 6.0, 4.0),
            Colour::new(0.1, 0.1, 0.1),
            Colour::new(0.7, 0.7, 0.7),
            WHITE,
        ),
        Light::new(
            WorldPoint::new(5.0, 3.0, 2.0),
            Colour::new(0.05, 0.05, 0.05),
            Colour::new(0.3, 0.3, 0.4),
            Colour::new(0.5, 0.5, 0.5),
        ),
    ];

    Ok(Scene::builder()
        .primitives(primitives)
        .lights(lights)
        .camera(camera)
        .build())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("whitted.png"));

    let scene = demo_scene()?;
    let resolution = scene.camera.get_resolution();

    let bar = ProgressBar::new(resolution.y as u64);
    let colours = render_with_progress(&scene, &RenderSettings::default(), |progress| {
        bar.update(|ps| {
            ps.set_len(progress.total as u64);
            ps.set_pos(progress.finished as u64)
        })
    });
    bar.finish();

    ImageFileBuffer::from_colours(resolution, &colours)?.save(&output)?;
    info!("Saved {}", output.display());

    Ok(())
}
