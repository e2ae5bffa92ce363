//! Ordered history of bob positions.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque::Iter;

use crate::vector::Point;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composites this color over an opaque background, dropping alpha.
    ///
    /// ```rust
    /// use foucault::Rgba;
    ///
    /// let half_white = Rgba::new(255, 255, 255, 128);
    /// assert_eq!(half_white.over(Rgba::new(0, 0, 0, 255)), Rgba::new(128, 128, 128, 255));
    /// ```
    #[must_use]
    pub fn over(self, background: Rgba) -> Rgba {
        let a = u32::from(self.a);
        let blend = |fg: u8, bg: u8| -> u8 {
            let mixed = (u32::from(fg) * a + u32::from(bg) * (255 - a) + 127) / 255;
            // mixed <= 255 by construction
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        Rgba::new(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
            255,
        )
    }
}

/// Color every trail point is tagged with.
pub const TRAIL_COLOR: Rgba = Rgba::new(100, 100, 255, 100);

/// A recorded bob position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailPoint {
    /// Where the bob was.
    pub position: Point,
    /// Render color of the point.
    pub color: Rgba,
}

impl TrailPoint {
    /// Creates a trail point with [`TRAIL_COLOR`].
    #[inline]
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            color: TRAIL_COLOR,
        }
    }
}

/// Ordered sequence of [`TrailPoint`]s, oldest first.
///
/// Unbounded by default, in which case points are only ever appended. With a
/// limit, the oldest point is evicted once the trail is full, so the newest
/// `limit` positions are kept. [`Trail::recorded`] counts every push,
/// evicted points included.
///
/// # Example
///
/// ```
/// use foucault::{Point, Trail};
///
/// let mut trail = Trail::new(Some(2));
/// for x in [1.0, 2.0, 3.0] {
///     trail.push(Point::new(x, 0.0));
/// }
/// let xs: Vec<f64> = trail.iter().map(|p| p.position.x).collect();
/// assert_eq!(xs, [2.0, 3.0]);
/// assert_eq!(trail.recorded(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    limit: Option<usize>,
    recorded: u64,
}

impl Trail {
    /// Creates an empty trail.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            points: VecDeque::new(),
            limit,
            recorded: 0,
        }
    }

    /// Appends a position, evicting the oldest point if the trail is full.
    pub fn push(&mut self, position: Point) {
        if let Some(limit) = self.limit {
            while self.points.len() >= limit {
                self.points.pop_front();
            }
        }
        self.points.push_back(TrailPoint::new(position));
        self.recorded += 1;
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
        self.recorded = 0;
    }

    /// Number of points currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the trail holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points pushed since the last clear, including evicted ones.
    ///
    /// Renderers use this to rasterize only what was added since they last
    /// looked.
    #[inline]
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// Configured capacity, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Most recent point.
    #[inline]
    pub fn last(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    /// Iterates from oldest to newest.
    #[inline]
    pub fn iter(&self) -> Iter<'_, TrailPoint> {
        self.points.iter()
    }

    /// Iterates over the newest `n` points, oldest first.
    pub fn newest(&self, n: usize) -> impl Iterator<Item = &TrailPoint> {
        let skip = self.points.len().saturating_sub(n);
        self.points.iter().skip(skip)
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a TrailPoint;
    type IntoIter = Iter<'a, TrailPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
