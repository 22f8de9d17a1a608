use std::collections::VecDeque;

use sightline_math::Mat4;

/// Ordered chain of model-view transforms.
///
/// The combined matrix is `base * m0 * m1 * ... * mk`, so the bottom entry is
/// applied last to a vertex and the top entry first. Clone a stack to derive an
/// independent child that can be extended without touching the parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelViewStack {
    matrices: VecDeque<Mat4>,
}

impl ModelViewStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform applied before everything already on the stack.
    pub fn put_top(&mut self, m: Mat4) -> &mut Self {
        self.matrices.push_back(m);
        self
    }

    /// Prepends a transform applied after everything already on the stack.
    pub fn put_bottom(&mut self, m: Mat4) -> &mut Self {
        self.matrices.push_front(m);
        self
    }

    pub fn pop_top(&mut self) -> Option<Mat4> {
        self.matrices.pop_back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn clear(&mut self) {
        self.matrices.clear();
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Mat4> {
        self.matrices.iter()
    }

    /// Folds the stack onto `base`.
    pub fn calc(&self, base: Mat4) -> Mat4 {
        self.matrices.iter().fold(base, |acc, m| acc * *m)
    }
}
