//! Scene demo — seeds a few moving shapes and renders their outlines.
//!
//! Usage:
//! ```text
//! cargo run --example scene
//! RUST_LOG=planar=debug cargo run --example scene
//! ```

use planar::geometry::{Circle, Polygon2D};
use planar::math::Vector2;
use planar::operations::transform::RelativeCoordinates;
use planar::render::{populate_surface, OutlineRenderer, RecordingSurface, TessellationParams};
use planar::scene::{Scene, ShapeData};
use planar::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planar and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scene=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let triangle = Polygon2D::new(vec![
        Vector2::new(1.0, 1.0),
        Vector2::new(3.0, 1.0),
        Vector2::new(1.0, 3.0),
    ]);
    let relative = RelativeCoordinates::new(&triangle).execute()?;
    tracing::info!(
        center = ?relative.center(),
        radius = relative.radius(),
        "triangle in relative coordinates"
    );

    let shapes = [
        ShapeData::new(relative.bounding_circle())
            .with_velocity(Vector2::new(1.0, 0.0))
            .with_rotational_speed(0.25),
        ShapeData::new(Circle::new(Vector2::new(-4.0, 2.0), 1.5)?)
            .with_velocity(Vector2::new(0.0, -2.0))
            .with_rotational_speed(-1.0),
        ShapeData::new(Circle::new(Vector2::new(6.0, -3.0), 0.5)?),
    ];
    let scene = Scene::from_shapes(&shapes);

    let renderer = OutlineRenderer::new(TessellationParams::default())?;
    let mut surface = RecordingSurface::new();
    let count = populate_surface(&scene, &renderer, &mut surface)?;

    for (polyline, (_, shape)) in surface.drawables().iter().zip(scene.iter()) {
        tracing::info!(
            center = ?shape.circle.center(),
            radius = shape.circle.radius(),
            anticlockwise = shape.is_anticlockwise(),
            segments = polyline.points.len(),
            "rendered shape"
        );
    }
    tracing::info!(count, "scene rendered");
    Ok(())
}
