//! Stateless vector algorithms.
//!
//! Everything here takes vectors by value and returns fresh values; NaN follows
//! plain IEEE-754 arithmetic unless a function documents otherwise.

mod buffer;
mod interpolate;
mod ops;

pub use buffer::{
    as_floats, colors_to_buffer, list_to_buffer, to_buffer, vec_list_to_buffer,
    vectors_to_buffer,
};
pub use interpolate::{bezier_curve, cubic_bezier, degrees_bezier_curve, interpolate_colors};
pub use ops::{Cross, cross, dot, length, normalize, normalize_in_place};
