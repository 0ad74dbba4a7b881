/// A closed range of ray parameters or times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A degenerate interval holding a single instant.
    pub const fn point(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Exclusive membership test, used for accepting intersection roots.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, upper bound replaced. Used to shrink the search
    /// range to the closest hit found so far.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}
