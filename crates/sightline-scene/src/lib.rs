//! Scene-side plumbing on top of `sightline-math`.
//!
//! Everything here talks to the renderer through [`UniformSink`]; no graphics
//! API is linked.
//!
//! - [`camera`]: perspective camera parameters and matrix upload
//! - [`model_view_stack`]: ordered model-view transform chain
//! - [`light`]: point light uniforms
//! - [`uniform`]: uniform values, the sink trait and a staging table
//! - [`logging`]: `env_logger` setup for binaries

pub mod camera;
pub mod light;
pub mod logging;
pub mod model_view_stack;
pub mod uniform;

pub use camera::Camera;
pub use light::LightSource;
pub use model_view_stack::ModelViewStack;
pub use uniform::{UniformSink, UniformTable, UniformValue};
