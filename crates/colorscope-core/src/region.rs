use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorscopeError;

/// Integer pixel position in image space. May lie outside the image while a
/// pointer is dragged past its border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Two corner points selected by the operator, in any order.
///
/// Serialized as `[[x1, y1], [x2, y2]]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[[i32; 2]; 2]", into = "[[i32; 2]; 2]")]
pub struct Region {
    pub p1: Point,
    pub p2: Point,
}

/// Pixel-aligned rectangle clipped to image bounds. `width`/`height` are > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Both corners at the same position (a plain click).
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Top-left and bottom-right corners.
    pub fn normalized(&self) -> (Point, Point) {
        (
            Point::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y)),
            Point::new(self.p1.x.max(self.p2.x), self.p1.y.max(self.p2.y)),
        )
    }

    /// Pixels covered by the region inside an image of `width` x `height`.
    ///
    /// The extent is `[min, max)` on each axis, widened to one pixel when
    /// both corners share a row or column, then clipped to the image.
    /// Returns `None` when nothing of the region lies inside the image.
    pub fn pixel_rect(&self, width: usize, height: usize) -> Option<PixelRect> {
        let (min, max) = self.normalized();
        let (x0, x1) = clip_span(min.x, max.x, width)?;
        let (y0, y1) = clip_span(min.y, max.y, height)?;
        Some(PixelRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

fn clip_span(min: i32, max: i32, limit: usize) -> Option<(usize, usize)> {
    let end = (max as i64).max(min as i64 + 1);
    let start = (min as i64).clamp(0, limit as i64) as usize;
    let end = end.clamp(0, limit as i64) as usize;
    if end > start {
        Some((start, end))
    } else {
        None
    }
}

impl From<[[i32; 2]; 2]> for Region {
    fn from([[x1, y1], [x2, y2]]: [[i32; 2]; 2]) -> Self {
        Self::from_coords(x1, y1, x2, y2)
    }
}

impl From<Region> for [[i32; 2]; 2] {
    fn from(r: Region) -> Self {
        [[r.p1.x, r.p1.y], [r.p2.x, r.p2.y]]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

/// Parses `x1,y1,x2,y2`.
impl FromStr for Region {
    type Err = ColorscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords: Vec<i32> = s
            .split(',')
            .map(|c| c.trim().parse::<i32>())
            .collect::<Result<_, _>>()
            .map_err(|_| ColorscopeError::Format(format!("region '{s}'")))?;
        match coords.as_slice() {
            [x1, y1, x2, y2] => Ok(Self::from_coords(*x1, *y1, *x2, *y2)),
            _ => Err(ColorscopeError::Format(format!(
                "region '{s}' needs four coordinates x1,y1,x2,y2"
            ))),
        }
    }
}
