// Visible area the particles live in. Pixel-space demos recycle against the
// window size, the normalized demo against clip space.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub centre: [f64; 2],
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport {
            width,
            height,
            centre: Viewport::centre_of(width, height),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.centre = Viewport::centre_of(width, height);
    }

    fn centre_of(width: u32, height: u32) -> [f64; 2] {
        [(width as f64 / 2.0).round(), (height as f64 / 2.0).round()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    // Both edges count as inside; only strictly beyond them is out
    pub fn contains(&self, point: [f64; 2]) -> bool {
        !(point[0] < self.min[0]
            || point[0] > self.max[0]
            || point[1] < self.min[1]
            || point[1] > self.max[1])
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoordinateSpace {
    Pixels,
    Normalized,
}

impl CoordinateSpace {
    pub fn bounds(&self, viewport: &Viewport) -> Bounds {
        match self {
            CoordinateSpace::Pixels => Bounds {
                min: [0.0, 0.0],
                max: [viewport.width as f64, viewport.height as f64],
            },
            CoordinateSpace::Normalized => Bounds {
                min: [-1.0, -1.0],
                max: [1.0, 1.0],
            },
        }
    }
}
