use anyhow::Context;
use sightline_math::matrix_math::{rotate, translate, uniform_scale};
use sightline_math::vector_math::{bezier_curve, interpolate_colors, vectors_to_buffer};
use sightline_math::{Color4, Mat4, Vec3, Vec4};
use sightline_scene::logging::{init_logging, LoggingConfig};
use sightline_scene::{Camera, LightSource, ModelViewStack, UniformSink, UniformTable, UniformValue};

/// Sink that logs every upload before staging it.
#[derive(Default)]
struct TracingSink {
    table: UniformTable,
}

impl UniformSink for TracingSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        log::debug!(
            "uniform {name}: {} ({} floats)",
            value.type_name(),
            value.as_floats().len()
        );
        self.table.set_uniform(name, value);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║         SIGHTLINE STUDIO v0.1          ║");
    println!("  ║   camera · model-view · normal matrix  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let camera = Camera::default()
        .viewport(1280, 720)
        .eye(Vec4::point(4.0, 3.0, 6.0));

    // ── model-view chain ──────────────────────────────────────────────────
    let mut stack = ModelViewStack::new();
    stack
        .put_top(translate(0.0, 0.5, 0.0))
        .put_top(rotate(35.0, 0.0, 1.0, 0.0))
        .put_top(uniform_scale(1.5));

    let model = stack.calc(Mat4::IDENTITY);

    let mut sink = TracingSink::default();
    camera
        .upload(&mut sink, model)
        .context("camera parameters rejected")?;

    LightSource::new(Color4::rgb(1.0, 0.95, 0.8), Vec3::new(2.0, 8.0, 4.0)).apply(&mut sink);

    for (name, value) in sink.table.iter() {
        match value {
            UniformValue::Mat4(m) => println!("  {name}\n{m}\n"),
            UniformValue::Mat3(m) => println!("  {name}\n{m}\n"),
            other => println!("  {name} = {:?}\n", other.as_floats()),
        }
    }

    // ── vertex data ───────────────────────────────────────────────────────
    let path = bezier_curve(
        16,
        Vec4::point(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, -2.0, 0.0),
        Vec4::point(1.0, 0.0, 0.0),
    );
    let ramp = interpolate_colors(16, Color4::BLUE, Color4::RED);

    let positions = vectors_to_buffer(&path);
    log::info!(
        "packed {} path vertices ({} floats) and {} colors",
        path.len(),
        positions.len(),
        ramp.len()
    );

    Ok(())
}
