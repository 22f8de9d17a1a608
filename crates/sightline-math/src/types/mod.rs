//! Value types shared by every math routine.
//!
//! All types are `Copy`, fixed-size and allocation-free. Arithmetic always
//! returns a fresh value; the only in-place mutation is through explicit
//! setters and index assignment.

mod color;
mod matrix;
mod vector;

pub use color::Color4;
pub use matrix::{Mat2, Mat3, Mat4, Matrix};
pub use vector::{Vec2, Vec3, Vec4, Vector};
