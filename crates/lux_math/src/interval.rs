/// Admissible range of a ray parameter `t`.
///
/// Intersection queries accept a hit only when [`Interval::surrounds`] its
/// `t`, so both bounds are excluded there. [`Interval::contains`] keeps the
/// bounds and is used for extent tests such as box faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Everything strictly past `min`, unbounded above.
    pub fn beyond(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// `min <= x <= max`
    pub fn contains(&self, x: f32) -> bool {
        (self.min..=self.max).contains(&x)
    }

    /// `min < x < max`
    pub fn surrounds(&self, x: f32) -> bool {
        x > self.min && x < self.max
    }

    /// Same lower bound, upper bound replaced by `max`.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval { max, ..*self }
    }
}
