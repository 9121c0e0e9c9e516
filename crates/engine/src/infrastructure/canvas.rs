//! Headless canvas that logs what would be drawn.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::infrastructure::ports::CanvasPort;

/// Canvas used by the command-line runner.
///
/// Keeps the last applied image and a redraw count so callers can report
/// what a viewer would currently see.
#[derive(Default)]
pub struct LoggingCanvas {
    current: Mutex<Option<String>>,
    applied: AtomicUsize,
    redraws: AtomicUsize,
}

impl LoggingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_image(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn apply_count(&self) -> usize {
        self.applied.load(Ordering::SeqCst)
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws.load(Ordering::SeqCst)
    }
}

impl CanvasPort for LoggingCanvas {
    fn apply_image(&self, image: &str) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(image.to_string());
        self.applied.fetch_add(1, Ordering::SeqCst);
        tracing::info!(image = %image, "Background applied");
    }

    fn force_redraw(&self) {
        self.redraws.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Canvas redraw");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_last_image_and_counts() {
        let canvas = LoggingCanvas::new();
        assert_eq!(canvas.current_image(), None);

        canvas.apply_image("maps/room.png");
        canvas.apply_image("maps/room-night.png");
        canvas.force_redraw();

        assert_eq!(canvas.current_image().as_deref(), Some("maps/room-night.png"));
        assert_eq!(canvas.apply_count(), 2);
        assert_eq!(canvas.redraw_count(), 1);
    }
}
