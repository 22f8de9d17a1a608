//! Flattening helpers for vertex and uniform buffers.
//!
//! Output is tightly packed, components in declaration order, elements in input
//! order. The slice forms borrow; the iterator forms collect.

use crate::types::{Color4, Vector};

/// Zero-copy flat view of a slice of vectors.
#[inline]
pub fn as_floats<const N: usize>(vectors: &[Vector<N>]) -> &[f32] {
    bytemuck::cast_slice(vectors)
}

#[inline]
pub fn to_buffer(values: &[f32]) -> Vec<f32> {
    values.to_vec()
}

#[inline]
pub fn vectors_to_buffer<const N: usize>(vectors: &[Vector<N>]) -> Vec<f32> {
    as_floats(vectors).to_vec()
}

#[inline]
pub fn colors_to_buffer(colors: &[Color4]) -> Vec<f32> {
    bytemuck::cast_slice(colors).to_vec()
}

pub fn list_to_buffer<I>(values: I) -> Vec<f32>
where
    I: IntoIterator<Item = f32>,
{
    values.into_iter().collect()
}

pub fn vec_list_to_buffer<const N: usize, I>(vectors: I) -> Vec<f32>
where
    I: IntoIterator<Item = Vector<N>>,
{
    vectors.into_iter().flat_map(Vector::to_array).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Vec2, Vec3, Vec4};

    #[test]
    fn float_slice_is_copied_in_order() {
        let input = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(to_buffer(&input), input.to_vec());
        assert_eq!(list_to_buffer(input.iter().copied()), input.to_vec());
    }

    #[test]
    fn vector_slices_flatten_without_padding() {
        let v2 = [Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0)];
        assert_eq!(vectors_to_buffer(&v2), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let v3 = [Vec3::new(0.0, 1.0, 2.0), Vec3::new(3.0, 4.0, 5.0)];
        assert_eq!(vectors_to_buffer(&v3), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let v4 = [Vec4::new(0.0, 1.0, 2.0, 3.0), Vec4::new(3.0, 4.0, 5.0, 6.0)];
        assert_eq!(as_floats(&v4), &[0.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn vector_lists_flatten_in_order() {
        let v2: Vec<Vec2> = (0..7).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let expected: Vec<f32> = (0..7).flat_map(|i| [i as f32, 0.0]).collect();
        assert_eq!(vec_list_to_buffer(v2), expected);

        let v3: Vec<Vec3> = (0..7).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let expected: Vec<f32> = (0..7).flat_map(|i| [i as f32, 0.0, 0.0]).collect();
        assert_eq!(vec_list_to_buffer(v3), expected);

        let v4: Vec<Vec4> = (0..7).map(|i| Vec4::new(i as f32, 0.0, 0.0, 0.0)).collect();
        let expected: Vec<f32> = (0..7).flat_map(|i| [i as f32, 0.0, 0.0, 0.0]).collect();
        assert_eq!(vec_list_to_buffer(v4), expected);
    }

    #[test]
    fn colors_flatten_as_rgba() {
        let colors = [Color4::RED, Color4::new(0.1, 0.2, 0.3, 0.4)];
        assert_eq!(colors_to_buffer(&colors), vec![1.0, 0.0, 0.0, 1.0, 0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn empty_input_gives_empty_buffer() {
        assert!(vectors_to_buffer::<3>(&[]).is_empty());
        assert!(list_to_buffer(std::iter::empty()).is_empty());
    }
}
