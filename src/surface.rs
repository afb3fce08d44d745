// Drawing surface the simulation renders into, plus the boid glyph itself.
// The browser build draws into a CanvasRenderingContext2d; tests record calls.

use crate::particle::Particle;
use web_sys::CanvasRenderingContext2d;

pub trait RenderSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn set_fill_color(&mut self, color: &str);
    fn fill(&mut self);
}

impl RenderSurface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    // translate and rotate only fail on non-finite input, which the canvas ignores anyway
    fn translate(&mut self, x: f64, y: f64) {
        let _ = CanvasRenderingContext2d::translate(self, x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = CanvasRenderingContext2d::rotate(self, angle);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn set_fill_color(&mut self, color: &str) {
        #[allow(deprecated)]
        CanvasRenderingContext2d::set_fill_style(self, &wasm_bindgen::JsValue::from_str(color));
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
}

/// Draws one boid as a filled triangle centered on its position, nose along its heading.
pub fn draw_boid<S: RenderSurface + ?Sized>(surface: &mut S, particle: &Particle) {
    let half = particle.size() / 2.0;
    surface.save();
    surface.translate(particle.pos[0], particle.pos[1]);
    surface.rotate(particle.heading());
    surface.begin_path();
    surface.move_to(0.0, -half);
    surface.line_to(half, half);
    surface.line_to(-half, half);
    surface.close_path();
    surface.set_fill_color(particle.color().as_str());
    surface.fill();
    surface.restore();
}

// Clears the whole canvas, then draws every boid
pub fn render_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    width: f64,
    height: f64,
) {
    surface.clear_rect(0.0, 0.0, width, height);
    for particle in particles {
        draw_boid(surface, particle);
    }
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearRect(f64, f64, f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    FillColor(String),
    Fill,
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::ClearRect(x, y, width, height));
    }
    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }
    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::Translate(x, y));
    }
    fn rotate(&mut self, angle: f64) {
        self.calls.push(DrawCall::Rotate(angle));
    }
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }
    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(DrawCall::FillColor(color.to_owned()));
    }
    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }
}
