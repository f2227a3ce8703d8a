use glam::Mat4;

/// LIFO stack of composed transforms.
///
/// The raw `push_copy` / `pop` pair is available, but traversal code uses
/// [`MatrixStack::scope`], which pops on the way out so every push is
/// matched by construction.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    frames: Vec<Mat4>,
    /// Total pushes since construction (instrumentation).
    pushes: u64,
    /// Total pops since construction (instrumentation).
    pops: u64,
}

impl MatrixStack {
    /// Create a stack whose root frame is `root` (usually the view matrix).
    pub fn new(root: Mat4) -> Self {
        let mut frames = Vec::with_capacity(8);
        frames.push(root);
        Self { frames, pushes: 0, pops: 0 }
    }

    /// Create an empty stack. `push` a root before any other call.
    pub fn empty() -> Self {
        Self { frames: Vec::with_capacity(8), pushes: 0, pops: 0 }
    }

    /// Push an explicit matrix (used for the root frame).
    pub fn push(&mut self, m: Mat4) {
        self.frames.push(m);
        self.pushes += 1;
    }

    /// Duplicate the top frame. Panics on an empty stack.
    pub fn push_copy(&mut self) {
        let top = self.top();
        self.push(top);
    }

    /// Replace top `T` with `T · m`. Panics on an empty stack.
    pub fn multiply_top(&mut self, m: Mat4) {
        let top = self.top_mut();
        *top *= m;
    }

    /// Remove and return the top frame. Panics on an empty stack.
    pub fn pop(&mut self) -> Mat4 {
        let Some(m) = self.frames.pop() else {
            panic!("MatrixStack::pop on an empty stack (unbalanced traversal)");
        };
        self.pops += 1;
        m
    }

    /// Current composed matrix. Panics on an empty stack.
    pub fn top(&self) -> Mat4 {
        match self.frames.last() {
            Some(m) => *m,
            None => panic!("MatrixStack::top on an empty stack"),
        }
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        match self.frames.last_mut() {
            Some(m) => m,
            None => panic!("MatrixStack::multiply_top on an empty stack"),
        }
    }

    /// Push a copy of the top, run `f`, then pop back to the entry depth.
    ///
    /// Panics if `f` leaves the stack shallower than it found it.
    pub fn scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let entry_depth = self.depth();
        self.push_copy();
        let result = f(self);
        assert!(
            self.depth() > entry_depth,
            "MatrixStack scope body popped below its entry depth ({} < {})",
            self.depth(),
            entry_depth + 1
        );
        while self.depth() > entry_depth {
            self.pop();
        }
        result
    }

    /// Number of live frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// `pushes - pops` since construction.
    pub fn net_pushes(&self) -> i64 {
        self.pushes as i64 - self.pops as i64
    }

    pub fn push_count(&self) -> u64 {
        self.pushes
    }

    pub fn pop_count(&self) -> u64 {
        self.pops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn push_copy_duplicates_top() {
        let root = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let mut stack = MatrixStack::new(root);
        stack.push_copy();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), root);
    }

    #[test]
    fn multiply_top_post_multiplies() {
        let a = Mat4::from_translation(Vec3::X);
        let b = Mat4::from_scale(Vec3::splat(2.0));
        let mut stack = MatrixStack::new(a);
        stack.multiply_top(b);
        assert_eq!(stack.top(), a * b);
        // Translation of the root is unaffected, scale applies in local space.
        assert_eq!(stack.top().transform_point3(Vec3::X), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn pop_restores_parent() {
        let mut stack = MatrixStack::new(Mat4::IDENTITY);
        stack.push_copy();
        stack.multiply_top(Mat4::from_rotation_y(1.0));
        stack.pop();
        assert_eq!(stack.top(), Mat4::IDENTITY);
        assert_eq!(stack.net_pushes(), 0);
    }

    #[test]
    #[should_panic(expected = "empty stack")]
    fn pop_empty_panics() {
        let mut stack = MatrixStack::empty();
        stack.pop();
    }

    #[test]
    #[should_panic(expected = "empty stack")]
    fn top_empty_panics() {
        MatrixStack::empty().top();
    }

    #[test]
    fn scope_balances_nested_pushes() {
        let mut stack = MatrixStack::new(Mat4::IDENTITY);
        let inner_depth = stack.scope(|s| {
            s.multiply_top(Mat4::from_translation(Vec3::Z));
            s.scope(|s| {
                s.multiply_top(Mat4::from_scale(Vec3::splat(3.0)));
                s.depth()
            })
        });
        assert_eq!(inner_depth, 3);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Mat4::IDENTITY);
        assert_eq!(stack.push_count(), 2);
        assert_eq!(stack.pop_count(), 2);
    }

    #[test]
    fn scope_cleans_up_stray_pushes() {
        let mut stack = MatrixStack::new(Mat4::IDENTITY);
        stack.scope(|s| {
            s.push_copy();
            s.push_copy();
        });
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.net_pushes(), 0);
    }

    #[test]
    #[should_panic(expected = "below its entry depth")]
    fn scope_detects_over_pop() {
        let mut stack = MatrixStack::new(Mat4::IDENTITY);
        stack.push_copy();
        stack.scope(|s| {
            s.pop();
            s.pop();
        });
    }
}
