//! Presentation port

use crate::settings::Phase;

/// Sink for session progress
///
/// The engine only reports how far through a phase it is. Geometry,
/// colours and layout belong to the implementation. Calls are infallible
/// from the engine's side; implementations drop backend errors.
pub trait PresentationPort {
    /// Draw a full frame for `progress` (0.0..=1.0) through `phase`
    fn render(&mut self, progress: f32, phase: Phase);

    /// Blank the surface
    fn clear(&mut self);
}

impl<T: PresentationPort + ?Sized> PresentationPort for &mut T {
    fn render(&mut self, progress: f32, phase: Phase) {
        (**self).render(progress, phase)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
