//! Character-cell drawing of the pendulum.
//!
//! World coordinates are centered on the pivot with `y` pointing down. The
//! [`Viewport`] maps them to terminal cells at draw time; the simulation
//! never sees a display offset. Terminal cells are roughly twice as tall as
//! they are wide, so horizontal distances are stretched by [`CELL_ASPECT`]
//! to keep the swing circular on screen.

use foucault::{Point, RenderSnapshot, Rgba, TRAIL_COLOR, Trail};
use unicode_width::UnicodeWidthChar;

/// Horizontal cells per vertical cell for the same world distance.
pub const CELL_ASPECT: f64 = 2.0;

/// Window background.
pub const BACKGROUND: Rgba = Rgba::new(30, 30, 30, 255);
/// Bob fill.
pub const BOB_COLOR: Rgba = Rgba::new(255, 0, 0, 255);
/// Rod and pivot.
pub const ROD_COLOR: Rgba = Rgba::new(255, 255, 255, 255);
/// Statistics and help text.
pub const TEXT_COLOR: Rgba = Rgba::new(255, 255, 255, 255);

const TRAIL_GLYPH: char = '·';
const ROD_GLYPH: char = '•';
const PIVOT_GLYPH: char = '+';
const BOB_GLYPH: char = '●';

const RESET: &str = "\x1b[0m";

// =============================================================================
// Viewport
// =============================================================================

/// Maps world coordinates to terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    /// Rows per world unit.
    scale: f64,
}

impl Viewport {
    /// Fits a circle of `radius` world units, centered on the pivot, into a
    /// `cols` x `rows` terminal with a one-cell margin.
    pub fn fit(cols: u16, rows: u16, radius: f64) -> Self {
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            1.0
        };
        let half_rows = (f64::from(rows) / 2.0 - 1.0).max(1.0);
        let half_cols = (f64::from(cols) / 2.0 - 1.0).max(1.0);
        let scale = (half_rows / radius).min(half_cols / (CELL_ASPECT * radius));

        Self { cols, rows, scale }
    }

    /// Terminal width in cells.
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Terminal height in cells.
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Rows per world unit.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Continuous cell coordinates of `point`, `(col, row)`.
    fn to_cells(&self, point: Point) -> (f64, f64) {
        (
            f64::from(self.cols) / 2.0 + point.x * self.scale * CELL_ASPECT,
            f64::from(self.rows) / 2.0 + point.y * self.scale,
        )
    }

    /// Cell containing `point`, which may lie off screen.
    pub fn project(&self, point: Point) -> (i64, i64) {
        cell_of(self.to_cells(point))
    }

    /// On-screen cells of the segment from `from` to `to`.
    ///
    /// The segment is clipped to the screen before it is walked, so the
    /// cost is bounded by the screen size however far off screen the ends
    /// lie. Segments with a non-finite end are skipped.
    pub fn segment(&self, from: Point, to: Point) -> impl Iterator<Item = (i64, i64)> {
        let bounds = (f64::from(self.cols), f64::from(self.rows));
        clip_segment(self.to_cells(from), self.to_cells(to), bounds)
            .into_iter()
            .flat_map(|(a, b)| line_cells(cell_of(a), cell_of(b)))
    }

    /// Index into a row-major buffer, or `None` off screen.
    #[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn index(&self, (col, row): (i64, i64)) -> Option<usize> {
        let on_screen = (0..i64::from(self.cols)).contains(&col)
            && (0..i64::from(self.rows)).contains(&row);
        on_screen.then(|| row as usize * usize::from(self.cols) + col as usize)
    }

    fn area(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

/// Cell containing continuous cell coordinates. Saturates for
/// out-of-range input, which `index` then rejects.
#[expect(clippy::cast_possible_truncation)]
fn cell_of((col, row): (f64, f64)) -> (i64, i64) {
    (col.floor() as i64, row.floor() as i64)
}

/// Liang-Barsky clip of a segment to `[0, width] x [0, height]`.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    (width, height): (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    if !(from.0.is_finite() && from.1.is_finite() && dx.is_finite() && dy.is_finite()) {
        return None;
    }

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-dx, from.0),
        (dx, width - from.0),
        (-dy, from.1),
        (dy, height - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (t0.mul_add(dx, from.0), t0.mul_add(dy, from.1)),
        (t1.mul_add(dx, from.0), t1.mul_add(dy, from.1)),
    ))
}

/// Cells on the straight line from `from` to `to`, both ends included.
fn line_cells(from: (i64, i64), to: (i64, i64)) -> impl Iterator<Item = (i64, i64)> {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let cell = (x, y);
        if cell == to {
            done = true;
        } else {
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Some(cell)
    })
}

// =============================================================================
// Trail layer
// =============================================================================

/// Persistent raster of the trail.
///
/// Only points recorded since the last sync are drawn, so the per-frame
/// cost does not grow with the trail. The layer is rebuilt from scratch
/// when the viewport changes, after a reset, and every frame for a bounded
/// trail (evicted points must disappear).
#[derive(Debug, Clone)]
pub struct TrailLayer {
    viewport: Viewport,
    cells: Vec<bool>,
    drawn: u64,
    last_point: Option<Point>,
}

impl TrailLayer {
    /// Creates an empty layer for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cells: vec![false; viewport.area()],
            drawn: 0,
            last_point: None,
        }
    }

    /// Forgets everything drawn so far.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.drawn = 0;
        self.last_point = None;
    }

    /// Switches to a new viewport and redraws `trail` into it.
    pub fn rebuild(&mut self, viewport: Viewport, trail: &Trail) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.cells = vec![false; viewport.area()];
        }
        self.clear();
        self.sync(trail);
    }

    /// Draws points recorded since the previous sync.
    pub fn sync(&mut self, trail: &Trail) {
        if trail.recorded() < self.drawn || trail.limit().is_some() {
            self.clear();
        }

        let fresh = trail.recorded() - self.drawn;
        if fresh == 0 {
            return;
        }

        // Saturates on 32-bit targets; newest() caps at the trail length.
        let fresh = usize::try_from(fresh).unwrap_or(usize::MAX);
        for point in trail.newest(fresh) {
            let to = point.position;
            let from = self.last_point.unwrap_or(to);
            for c in self.viewport.segment(from, to) {
                if let Some(i) = self.viewport.index(c) {
                    self.cells[i] = true;
                }
            }
            self.last_point = Some(to);
        }
        self.drawn = trail.recorded();
    }

    /// Number of trail points already rasterized.
    pub const fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Returns true if the cell at `(col, row)` is covered by the trail.
    pub fn is_set(&self, col: u16, row: u16) -> bool {
        self.viewport
            .index((i64::from(col), i64::from(row)))
            .is_some_and(|i| self.cells[i])
    }

    /// Current viewport.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }
}

// =============================================================================
// Frame
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Rgba,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: TEXT_COLOR,
};

/// One composed screen.
#[derive(Debug, Clone)]
pub struct Frame {
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl Frame {
    /// Composes the trail layer, rod, pivot, bob, and text overlay.
    pub fn compose(layer: &TrailLayer, snapshot: &RenderSnapshot<'_>, overlay: &str) -> Self {
        let viewport = layer.viewport();
        let trail_fg = TRAIL_COLOR.over(BACKGROUND);
        let mut cells: Vec<Cell> = layer
            .cells
            .iter()
            .map(|&set| {
                if set {
                    Cell {
                        ch: TRAIL_GLYPH,
                        fg: trail_fg,
                    }
                } else {
                    BLANK
                }
            })
            .collect();

        let pivot = viewport.project(snapshot.pivot);
        let bob = viewport.project(snapshot.bob);

        for c in viewport.segment(snapshot.pivot, snapshot.bob) {
            if let Some(i) = viewport.index(c) {
                cells[i] = Cell {
                    ch: ROD_GLYPH,
                    fg: ROD_COLOR,
                };
            }
        }
        if let Some(i) = viewport.index(pivot) {
            cells[i] = Cell {
                ch: PIVOT_GLYPH,
                fg: ROD_COLOR,
            };
        }
        if let Some(i) = viewport.index(bob) {
            cells[i] = Cell {
                ch: BOB_GLYPH,
                fg: BOB_COLOR,
            };
        }

        let mut frame = Self { viewport, cells };
        frame.write_text(overlay);
        frame
    }

    /// Writes text from the top-left corner, one line per row, clipped to
    /// the screen.
    fn write_text(&mut self, text: &str) {
        let cols = usize::from(self.viewport.cols());
        for (row, line) in text.lines().take(usize::from(self.viewport.rows())).enumerate() {
            let mut col = 0;
            for ch in line.chars() {
                let width = ch.width().unwrap_or(0);
                if width == 0 {
                    continue;
                }
                if col + width > cols {
                    break;
                }
                self.cells[row * cols + col] = Cell { ch, fg: TEXT_COLOR };
                // Wide glyphs cover the next cell too.
                for pad in 1..width {
                    self.cells[row * cols + col + pad] = Cell {
                        ch: '\0',
                        fg: TEXT_COLOR,
                    };
                }
                col += width;
            }
        }
    }

    /// Character at `(col, row)`, or `None` off screen.
    pub fn char_at(&self, col: u16, row: u16) -> Option<char> {
        self.viewport
            .index((i64::from(col), i64::from(row)))
            .map(|i| self.cells[i].ch)
    }

    /// Renders rows separated by `\r\n`, with truecolor escapes unless
    /// `color` is false.
    pub fn render(&self, color: bool) -> String {
        let cols = usize::from(self.viewport.cols());
        let mut out = String::with_capacity(self.cells.len() * if color { 4 } else { 1 });
        if cols == 0 {
            return out;
        }

        for (row, line) in self.cells.chunks(cols).enumerate() {
            if row > 0 {
                out.push_str("\r\n");
            }
            let mut current: Option<Rgba> = None;
            if color {
                out.push_str(&background(BACKGROUND));
            }
            for cell in line {
                if cell.ch == '\0' {
                    continue;
                }
                if color && current != Some(cell.fg) {
                    out.push_str(&foreground(cell.fg));
                    current = Some(cell.fg);
                }
                out.push(cell.ch);
            }
            if color {
                out.push_str(RESET);
            }
        }
        out
    }
}

fn foreground(Rgba { r, g, b, .. }: Rgba) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

fn background(Rgba { r, g, b, .. }: Rgba) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}
