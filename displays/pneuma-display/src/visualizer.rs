//! Breathing visualizers
//!
//! Presentation ports over any `embedded-graphics` RGB565 target. Each
//! render is a full redraw. Draw errors are dropped: a missed frame is
//! replaced by the next one a few milliseconds later.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use pneuma_core::settings::Phase;
use pneuma_core::traits::PresentationPort;

use crate::extent::visual_extent;
use crate::palette::Palette;

/// Smallest circle radius in pixels
pub const MIN_RADIUS: u32 = 5;

/// Narrowest bar width in pixels
pub const MIN_BAR_WIDTH: u32 = 1;

/// Pulsing filled circle centred on the target
pub struct CircleVisualizer<D> {
    target: D,
    palette: Palette,
    center: Point,
    max_radius: u32,
}

impl<D: DrawTarget<Color = Rgb565>> CircleVisualizer<D> {
    /// Fit the circle to the target's bounding box
    pub fn new(target: D, palette: Palette) -> Self {
        let bounds = target.bounding_box();
        Self {
            center: bounds.center(),
            max_radius: bounds.size.width.min(bounds.size.height) / 2,
            target,
            palette,
        }
    }

    /// Radius drawn for `progress` through `phase`
    pub fn radius_for(&self, progress: f32, phase: Phase) -> u32 {
        visual_extent(progress, phase, MIN_RADIUS, self.max_radius)
    }

    /// Release the draw target
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D: DrawTarget<Color = Rgb565>> PresentationPort for CircleVisualizer<D> {
    fn render(&mut self, progress: f32, phase: Phase) {
        let radius = self.radius_for(progress, phase);
        self.target.clear(self.palette.background).ok();
        Circle::with_center(self.center, radius * 2)
            .into_styled(PrimitiveStyle::with_fill(self.palette.foreground))
            .draw(&mut self.target)
            .ok();
    }

    fn clear(&mut self) {
        self.target.clear(self.palette.background).ok();
    }
}

/// Full-height bar filling from the left edge
pub struct BarVisualizer<D> {
    target: D,
    palette: Palette,
    bounds: Rectangle,
}

impl<D: DrawTarget<Color = Rgb565>> BarVisualizer<D> {
    /// Fit the bar to the target's bounding box
    pub fn new(target: D, palette: Palette) -> Self {
        Self {
            bounds: target.bounding_box(),
            target,
            palette,
        }
    }

    /// Bar width drawn for `progress` through `phase`
    pub fn width_for(&self, progress: f32, phase: Phase) -> u32 {
        visual_extent(progress, phase, MIN_BAR_WIDTH, self.bounds.size.width)
    }

    /// Release the draw target
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D: DrawTarget<Color = Rgb565>> PresentationPort for BarVisualizer<D> {
    fn render(&mut self, progress: f32, phase: Phase) {
        let width = self.width_for(progress, phase);
        self.target.clear(self.palette.background).ok();
        Rectangle::new(
            self.bounds.top_left,
            Size::new(width, self.bounds.size.height),
        )
        .into_styled(PrimitiveStyle::with_fill(self.palette.foreground))
        .draw(&mut self.target)
        .ok();
    }

    fn clear(&mut self) {
        self.target.clear(self.palette.background).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_circle_radius_per_phase() {
        let vis = CircleVisualizer::new(mock(), Palette::default());
        assert_eq!(vis.radius_for(0.0, Phase::In), MIN_RADIUS);
        assert_eq!(vis.radius_for(1.0, Phase::In), 32);
        assert_eq!(vis.radius_for(0.5, Phase::Hold), 32);
        assert_eq!(vis.radius_for(0.5, Phase::Out), 16);
        assert_eq!(vis.radius_for(0.5, Phase::Stay), MIN_RADIUS);
    }

    #[test]
    fn test_circle_render_draws_centre() {
        let palette = Palette::default();
        let mut vis = CircleVisualizer::new(mock(), palette);
        vis.render(0.5, Phase::In);

        let display = vis.into_inner();
        assert_eq!(display.get_pixel(Point::new(31, 31)), Some(palette.foreground));
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(palette.background));
        assert_eq!(display.get_pixel(Point::new(60, 31)), Some(palette.background));
    }

    #[test]
    fn test_clear_blanks_target() {
        let palette = Palette::default();
        let mut vis = CircleVisualizer::new(mock(), palette);
        vis.render(1.0, Phase::Hold);
        vis.clear();

        let display = vis.into_inner();
        assert_eq!(display.get_pixel(Point::new(31, 31)), Some(palette.background));
    }

    #[test]
    fn test_bar_width_per_phase() {
        let vis = BarVisualizer::new(mock(), Palette::default());
        assert_eq!(vis.width_for(0.0, Phase::In), MIN_BAR_WIDTH);
        assert_eq!(vis.width_for(0.25, Phase::In), 16);
        assert_eq!(vis.width_for(0.9, Phase::Hold), 64);
        assert_eq!(vis.width_for(0.75, Phase::Out), 16);
        assert_eq!(vis.width_for(0.0, Phase::Stay), MIN_BAR_WIDTH);
    }

    #[test]
    fn test_bar_render_fills_from_left() {
        let palette = Palette::default();
        let mut vis = BarVisualizer::new(mock(), palette);
        vis.render(0.5, Phase::In);

        let display = vis.into_inner();
        assert_eq!(display.get_pixel(Point::new(0, 63)), Some(palette.foreground));
        assert_eq!(display.get_pixel(Point::new(31, 0)), Some(palette.foreground));
        assert_eq!(display.get_pixel(Point::new(32, 0)), Some(palette.background));
    }
}
