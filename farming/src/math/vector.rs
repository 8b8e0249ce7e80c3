pub trait VectorMath {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn distance(self, other: Self) -> f32;
    fn length(self) -> f32;
    fn length_squared(self) -> f32;
}

impl VectorMath for [f32; 2] {
    #[inline]
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1]]
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1]]
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    #[inline]
    fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    fn length_squared(self) -> f32 {
        self[0] * self[0] + self[1] * self[1]
    }
}
