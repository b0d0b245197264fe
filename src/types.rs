// Core types shared by the curve kernel, the controllers and the window.

/// Smallest radius we ever hand to a generator. Keeps both midpoint loops finite.
pub const MIN_RADIUS: f32 = 1.0;
/// Largest radius we ever hand to a generator. Far below 2^24, so `x += 1.0` /
/// `y -= 1.0` always change the value in f32 and the step count stays bounded.
pub const MAX_RADIUS: f32 = 4096.0;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Fill every pixel with one color (used to clear between frames).
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

/// Center and radii of the shape being drawn, in region-local pixels.
/// Invariant: `rx >= 1 && ry >= 1` after every write through `set_radii`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    pub center: (f32, f32),
    rx: f32,
    ry: f32,
}

impl ShapeParameters {
    pub fn new(center: (f32, f32), rx: f32, ry: f32) -> Self {
        let mut shape = Self { center, rx: MIN_RADIUS, ry: MIN_RADIUS };
        shape.set_radii(rx, ry);
        shape
    }

    pub fn rx(&self) -> f32 {
        self.rx
    }

    pub fn ry(&self) -> f32 {
        self.ry
    }

    /// Radius for the circle half of a split view.
    pub fn min_radius(&self) -> f32 {
        self.rx.min(self.ry)
    }

    /// Write both radii, clamped to `[MIN_RADIUS, MAX_RADIUS]`. NaN lands on the minimum.
    pub fn set_radii(&mut self, rx: f32, ry: f32) {
        self.rx = clamp_radius(rx);
        self.ry = clamp_radius(ry);
    }
}

#[inline]
pub fn clamp_radius(r: f32) -> f32 {
    // `max` returns the non-NaN operand, so NaN collapses to MIN_RADIUS too
    r.max(MIN_RADIUS).min(MAX_RADIUS)
}

/// Radius actually stepped by the midpoint loops: clamped, then floored onto the
/// pixel lattice. A fractional radius would let the last step overshoot the curve.
#[inline]
pub fn lattice_radius(r: f32) -> f32 {
    clamp_radius(r).floor()
}

/// Pixel extent of one drawing region; maps region-local pixels to [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn to_ndc(&self, x: f32, y: f32) -> [f32; 2] {
        [x / self.width * 2.0 - 1.0, y / self.height * 2.0 - 1.0]
    }
}

/// Ordered boundary points in normalized device coordinates.
/// Rebuilt from scratch every frame; never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub points: Vec<[f32; 2]>,
}

impl Curve {
    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
