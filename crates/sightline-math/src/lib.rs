//! Sightline math crate.
//!
//! Small fixed-size linear algebra for a real-time 3D pipeline: 2/3/4-component
//! vectors, 2×2/3×3/4×4 matrices, and the routines that build model, view,
//! projection and normal matrices from them.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | `Vector<N>`, `Matrix<N>`, `Color4` and their size aliases |
//! | [`vector_math`] | dot, length, normalize, cross, Bezier and color ramps, buffer packing |
//! | [`matrix_math`] | determinant, inverse, transpose, normal matrix, ortho/frustum/perspective/look-at, translate/scale/rotate |
//! | [`error`] | `MathError` |
//!
//! # Quick start
//!
//! ```rust
//! use sightline_math::matrix_math::{look_at, normal_matrix, perspective, rotation_y};
//! use sightline_math::{Vec4, Mat3};
//!
//! let projection = perspective(45.0, 16.0 / 9.0, 0.1, 100.0).unwrap();
//! let view = look_at(
//!     Vec4::point(0.0, 0.0, 5.0),
//!     Vec4::point(0.0, 0.0, 0.0),
//!     Vec4::new(0.0, 1.0, 0.0, 0.0),
//! );
//! let model_view = view * rotation_y(30.0);
//! let normals: Mat3 = normal_matrix(&model_view);
//!
//! let clip = projection * model_view * Vec4::point(0.0, 0.0, 0.0);
//! assert!(clip.w() > 0.0);
//! assert!(normals.is_finite());
//! ```

pub mod error;
pub mod matrix_math;
pub mod types;
pub mod vector_math;

pub use error::{MathError, MathResult};
pub use types::{Color4, Mat2, Mat3, Mat4, Matrix, Vec2, Vec3, Vec4, Vector};
