//! Interior-region detection for border templates.
//!
//! A border template is decorative artwork with a hole in the middle. The
//! interior is found by flood filling outward from one or more seed points,
//! propagating only through pixels that satisfy the interior predicate
//! (by default: any transparency at all). Opaque contour pixels act as sinks
//! that stop the fill.

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

/// Integer pixel coordinate. Valid for an image iff `x < width && y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Set of pixel coordinates to be overwritten by photo content.
///
/// Keeps both the fill discovery order (for iteration) and a row-major
/// membership bitmap (for O(1) `contains`).
#[derive(Clone, Debug)]
pub struct InteriorMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    points: Vec<Point>,
}

impl InteriorMask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
            points: Vec::new(),
        }
    }

    fn insert(&mut self, p: Point) {
        let idx = row_major(p, self.width);
        if !self.bits[idx] {
            self.bits[idx] = true;
            self.points.push(p);
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height && self.bits[row_major(p, self.width)]
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Default interior predicate: the pixel has any transparency.
pub fn has_transparency(px: Rgba<u8>) -> bool {
    px[3] < u8::MAX
}

/// Flood fill from the given seeds using the default transparency predicate.
pub fn compute_interior_mask(border: &RgbaImage, seeds: &[Point]) -> InteriorMask {
    flood_interior(border, seeds, has_transparency)
}

/// Multi-source BFS flood fill over the 4-connected pixel grid.
///
/// Frontier pixels failing `is_interior` are discarded without expansion.
/// The visited array is marked at enqueue time so no pixel is queued twice;
/// each pixel is visited at most once, O(width*height) time and space.
/// Out-of-bounds seeds are skipped.
pub fn flood_interior(
    border: &RgbaImage,
    seeds: &[Point],
    is_interior: impl Fn(Rgba<u8>) -> bool,
) -> InteriorMask {
    let (width, height) = border.dimensions();
    let mut mask = InteriorMask::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    // Row-major `y*width + x` throughout; bounds are checked per axis.
    let mut seen = vec![false; width as usize * height as usize];
    let mut frontier = VecDeque::new();

    for &seed in seeds {
        if seed.x >= width || seed.y >= height {
            continue;
        }
        let idx = row_major(seed, width);
        if !seen[idx] {
            seen[idx] = true;
            frontier.push_back(seed);
        }
    }

    while let Some(p) = frontier.pop_front() {
        if !is_interior(*border.get_pixel(p.x, p.y)) {
            // Contour pixel: a sink. Not part of the mask, and the fill does
            // not continue past it.
            continue;
        }
        mask.insert(p);

        for (dx, dy) in [(0i64, -1i64), (0, 1), (-1, 0), (1, 0)] {
            let nx = i64::from(p.x) + dx;
            let ny = i64::from(p.y) + dy;
            if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                continue;
            }
            let n = Point::new(nx as u32, ny as u32);
            let idx = row_major(n, width);
            if !seen[idx] {
                seen[idx] = true;
                frontier.push_back(n);
            }
        }
    }

    mask
}

fn row_major(p: Point, width: u32) -> usize {
    p.y as usize * width as usize + p.x as usize
}
