use super::Point;
use super::canvas::Canvas;
use super::palette::Palette;

/// Bresenham's line algorithm over real valued endpoints
///
/// Steps one unit at a time along the dominant axis and carries the
/// fractional error of the other axis in an accumulator. Lines steeper
/// than 45 degrees are reflected over y = x so the stepped slope never
/// exceeds 1, and every pixel is reflected back before it is yielded.
///
/// Endpoints are snapped down to the pixel containing them before
/// stepping. The pixels always run from the endpoint with the smaller
/// primary coordinate, so both directions of a line cover the same
/// pixels. The far endpoint itself is not included.
#[derive(Clone, Debug)]
pub(crate) struct Line {
    steep: bool,
    primary: f64,
    end: f64,
    secondary: f64,
    slope: f64,
    step: f64,
    accumulator: f64
}

impl Line {
    // Accumulated error past which the secondary axis advances
    const ERROR_BOUND: f64 = 0.5;

    pub(crate) fn new(a: Point, b: Point) -> Self {
        let a = Point::new(a.x.floor(), a.y.floor());
        let b = Point::new(b.x.floor(), b.y.floor());

        let steep = (b.y - a.y).abs() > (b.x - a.x).abs();

        let (a, b) = if steep {
            (Point::new(a.y, a.x), Point::new(b.y, b.x))
        } else {
            (a, b)
        };

        // Only a zero length line has no extent along the primary axis
        let slope = if a.x == b.x { 0f64 } else { (b.y - a.y) / (b.x - a.x) };

        let (start, end) = if a.x < b.x { (a, b) } else { (b, a) };

        Self {
            steep,
            primary: start.x,
            end: end.x,
            secondary: start.y,
            slope: slope.abs(),
            step: if slope < 0f64 { -1f64 } else { 1f64 },
            accumulator: 0f64
        }
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.primary >= self.end {
            return None;
        }

        let pixel = if self.steep {
            (self.secondary as i32, self.primary as i32)
        } else {
            (self.primary as i32, self.secondary as i32)
        };

        self.accumulator += self.slope;
        if self.accumulator > Self::ERROR_BOUND {
            self.secondary += self.step;

            // Keep the remainder so the error carries into later steps
            self.accumulator -= 1f64;
        }

        self.primary += 1f64;

        Some(pixel)
    }
}

/// Rasterizes the line from `a` to `b`, returning how many pixels were written
pub(crate) fn draw_line<C: Canvas>(canvas: &mut C, a: Point, b: Point, palette: &mut Palette) -> usize {
    let mut count = 0;
    for (x, y) in Line::new(a, b) {
        canvas.write_pixel(x, y, palette.next_color());
        count += 1;
    }

    log::trace!("({}, {}) -> ({}, {}) covered {} pixels", a.x, a.y, b.x, b.y, count);

    count
}
