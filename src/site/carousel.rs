// SPDX-License-Identifier: MPL-2.0
//! News carousel: slide selection, auto-rotation and per-slide image rotation.
//!
//! Time is passed in explicitly so the carousel can be driven by the
//! application heartbeat and by tests alike.

use std::time::{Duration, Instant};
use tracing::trace;

/// A cancellable, reschedulable periodic deadline.
///
/// Resetting cancels the pending deadline and schedules a fresh one a full
/// period from now. A cancelled timer never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimer {
    period: Duration,
    due: Option<Instant>,
}

impl RotationTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, due: None }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    #[must_use]
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    pub fn reset(&mut self, now: Instant) {
        self.due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// Fires at most once per call and reschedules from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// Result of one heartbeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    pub slide_changed: bool,
    pub image_changed: bool,
}

#[derive(Debug, Clone)]
pub struct NewsCarousel {
    image_counts: Vec<usize>,
    image_indices: Vec<usize>,
    current: usize,
    slide_timer: RotationTimer,
    image_timer: RotationTimer,
}

impl NewsCarousel {
    /// Creates a carousel over slides holding `image_counts[i]` images each,
    /// showing the first slide and starting its timers.
    #[must_use]
    pub fn new(
        image_counts: Vec<usize>,
        slide_every: Duration,
        image_every: Duration,
        now: Instant,
    ) -> Self {
        let mut carousel = Self {
            image_indices: vec![0; image_counts.len()],
            image_counts,
            current: 0,
            slide_timer: RotationTimer::new(slide_every),
            image_timer: RotationTimer::new(image_every),
        };
        if carousel.len() > 1 {
            carousel.slide_timer.reset(now);
        }
        carousel.show(0, now);
        carousel
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.image_counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_counts.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Image currently displayed by `slide`.
    #[must_use]
    pub fn image_index(&self, slide: usize) -> usize {
        self.image_indices.get(slide).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn slide_timer(&self) -> &RotationTimer {
        &self.slide_timer
    }

    #[must_use]
    pub fn image_timer(&self) -> &RotationTimer {
        &self.image_timer
    }

    /// Whether any timer needs the heartbeat.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.slide_timer.is_armed() || self.image_timer.is_armed()
    }

    pub fn previous(&mut self, now: Instant) {
        self.show(self.current as i64 - 1, now);
        self.restart_auto_rotate(now);
    }

    pub fn next(&mut self, now: Instant) {
        self.show(self.current as i64 + 1, now);
        self.restart_auto_rotate(now);
    }

    /// Jumps to a slide from its dot control.
    pub fn select(&mut self, slide: usize, now: Instant) {
        self.show(i64::try_from(slide).unwrap_or(i64::MAX), now);
        self.restart_auto_rotate(now);
    }

    /// Advances whichever timers are due.
    pub fn tick(&mut self, now: Instant) -> Advance {
        let mut advance = Advance::default();
        if self.slide_timer.poll(now) {
            self.show(self.current as i64 + 1, now);
            advance.slide_changed = true;
        }
        if self.image_timer.poll(now) {
            let count = self.image_counts.get(self.current).copied().unwrap_or(0);
            if let Some(index) = self.image_indices.get_mut(self.current) {
                *index = (*index + 1) % count.max(1);
                advance.image_changed = true;
                trace!(slide = self.current, image = *index, "news image rotated");
            }
        }
        advance
    }

    fn show(&mut self, index: i64, now: Instant) {
        let Ok(total) = i64::try_from(self.len()) else {
            return;
        };
        if total == 0 {
            return;
        }
        self.current = usize::try_from(index.rem_euclid(total)).unwrap_or(0);

        if self.image_counts[self.current] > 1 {
            self.image_timer.reset(now);
        } else {
            self.image_timer.cancel();
        }
    }

    fn restart_auto_rotate(&mut self, now: Instant) {
        if self.len() > 1 {
            self.slide_timer.reset(now);
        }
    }
}
