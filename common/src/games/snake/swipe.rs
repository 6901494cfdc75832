use std::ops::{Add, AddAssign, Sub};

/// Pixel-space vector. Positive `y` points down the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    pub start: Offset,
    pub end: Offset,
}

impl SwipeGesture {
    pub fn new(start: Offset, end: Offset) -> Self {
        Self { start, end }
    }

    pub fn delta(&self) -> Offset {
        self.end - self.start
    }

    pub fn delta_x(&self) -> f32 {
        self.delta().x
    }

    pub fn delta_y(&self) -> f32 {
        self.delta().y
    }

    pub fn distance(&self) -> f32 {
        self.delta().length()
    }
}

/// Screen density: pixels per density-independent pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
}

impl Density {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    pub fn to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

pub struct SwipeGestureConfig;

impl SwipeGestureConfig {
    /// Shorter swipes are treated as accidental touches.
    pub const MIN_SWIPE_DISTANCE_DP: f32 = 50.0;
}
