pub(crate) mod canvas;
pub(crate) mod line;
pub(crate) mod palette;

use crate::config::Config;

use canvas::{Canvas, Framebuffer};
use palette::Palette;

pub(crate) type Point = cgmath::Point2<f64>;

/// Input the sketch reacts to, already translated out of window events
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Click { x: i32, y: i32 },
    Quit
}

/// What the event loop should do after handling an input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Redraw,
    Quit
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum PendingLine {
    WaitingForFirst,
    WaitingForSecond(Point)
}

pub(crate) struct Sketch {
    framebuffer: Framebuffer,
    palette: Palette,
    pending: PendingLine
}

impl Sketch {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            framebuffer: Framebuffer::new(config.width, config.height, config.background),
            palette: Palette::new(config.palette, config.color, config.seed.as_deref()),
            pending: PendingLine::WaitingForFirst
        }
    }

    pub(crate) fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub(crate) fn handle(&mut self, input: Input) -> Flow {
        let (x, y) = match input {
            Input::Click { x, y } => (x, y),
            Input::Quit => return Flow::Quit
        };

        // Every click is marked, even the one that completes a line
        self.framebuffer.write_pixel(x, y, self.palette.next_color());

        let point = Point::new(x as f64, y as f64);
        self.pending = match self.pending {
            PendingLine::WaitingForFirst => {
                log::debug!("First endpoint at ({}, {})", x, y);

                PendingLine::WaitingForSecond(point)
            },
            PendingLine::WaitingForSecond(first) => {
                log::debug!("Second endpoint at ({}, {}), drawing line", x, y);

                line::draw_line(&mut self.framebuffer, first, point, &mut self.palette);
                PendingLine::WaitingForFirst
            }
        };

        Flow::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::palette::{Color, PaletteKind};

    fn sketch() -> Sketch {
        let config = Config {
            palette: PaletteKind::Fixed,
            color: Color::WHITE,
            background: Color::BLACK,
            ..Config::default()
        };

        Sketch::new(&config)
    }

    fn lit(sketch: &Sketch) -> usize {
        sketch.framebuffer().pixels().chunks_exact(4).filter(|p| p[..3] == [255, 255, 255]).count()
    }

    #[test]
    fn first_click_only_marks_the_point() {
        let mut sketch = sketch();

        assert_eq!(sketch.handle(Input::Click { x: 4, y: 7 }), Flow::Redraw);
        assert_eq!(sketch.pending, PendingLine::WaitingForSecond(Point::new(4.0, 7.0)));
        assert_eq!(sketch.framebuffer().pixel(4, 7), Some(Color::WHITE));
        assert_eq!(lit(&sketch), 1);
    }

    #[test]
    fn second_click_draws_and_resets() {
        let mut sketch = sketch();

        sketch.handle(Input::Click { x: 10, y: 20 });
        assert_eq!(sketch.handle(Input::Click { x: 30, y: 20 }), Flow::Redraw);

        assert_eq!(sketch.pending, PendingLine::WaitingForFirst);
        // The line covers 10..30 and the marker fills in its far end
        assert_eq!(lit(&sketch), 21);
        assert!((10..=30).all(|x| sketch.framebuffer().pixel(x, 20) == Some(Color::WHITE)));
    }

    #[test]
    fn third_click_starts_a_new_line() {
        let mut sketch = sketch();

        sketch.handle(Input::Click { x: 0, y: 0 });
        sketch.handle(Input::Click { x: 0, y: 5 });
        sketch.handle(Input::Click { x: 100, y: 100 });

        assert_eq!(sketch.pending, PendingLine::WaitingForSecond(Point::new(100.0, 100.0)));
        assert_eq!(lit(&sketch), 7);
    }

    #[test]
    fn same_point_twice_draws_nothing_extra() {
        let mut sketch = sketch();

        sketch.handle(Input::Click { x: 3, y: 3 });
        sketch.handle(Input::Click { x: 3, y: 3 });

        assert_eq!(sketch.pending, PendingLine::WaitingForFirst);
        assert_eq!(lit(&sketch), 1);
    }

    #[test]
    fn quit_leaves_canvas_untouched() {
        let mut sketch = sketch();

        sketch.handle(Input::Click { x: 1, y: 1 });
        assert_eq!(sketch.handle(Input::Quit), Flow::Quit);

        assert_eq!(sketch.pending, PendingLine::WaitingForSecond(Point::new(1.0, 1.0)));
        assert_eq!(lit(&sketch), 1);
    }
}
