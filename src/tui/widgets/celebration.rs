//! Celebration effect shown after a booking
//!
//! Two bursts of sparkles, one on each side of the screen, thinning out
//! until the effect's window closes. Purely cosmetic.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const MAX_PARTICLES: f64 = 50.0;
const GLYPHS: [char; 5] = ['*', '+', '.', 'o', '\u{2726}'];
const COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightBlue,
];

/// A running celebration
#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    started_at: Instant,
    duration: Duration,
}

impl Celebration {
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < self.duration
    }

    /// Share of the window still left, 1.0 at start and 0.0 at the end
    pub fn remaining_fraction(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        (1.0 - elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Sparkles per burst at `now`
    pub fn particle_count(&self, now: Instant) -> usize {
        (MAX_PARTICLES * self.remaining_fraction(now)).round() as usize
    }
}

/// Renders one frame of a celebration over whatever is below it
pub struct CelebrationWidget {
    particles: usize,
}

impl CelebrationWidget {
    pub fn new(celebration: &Celebration, now: Instant) -> Self {
        Self {
            particles: celebration.particle_count(now),
        }
    }
}

impl Widget for CelebrationWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height == 0 {
            return;
        }

        let mut rng = rand::thread_rng();
        let width = f64::from(area.width);
        for (low, high) in [(0.1, 0.3), (0.7, 0.9)] {
            for _ in 0..self.particles {
                let x = area.x + (width * rng.gen_range(low..high)) as u16;
                let y = area.y + rng.gen_range(0..area.height);
                let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
                let color = COLORS[rng.gen_range(0..COLORS.len())];
                buf.set_string(x, y, glyph.to_string(), Style::default().fg(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebration_window() {
        let start = Instant::now();
        let c = Celebration::new(start, Duration::from_secs(3));

        assert!(c.is_active(start));
        assert_eq!(c.particle_count(start), 50);
        assert_eq!(c.particle_count(start + Duration::from_millis(1500)), 25);
        assert!(!c.is_active(start + Duration::from_secs(3)));
        assert_eq!(c.particle_count(start + Duration::from_secs(4)), 0);
    }

    #[test]
    fn test_render_stays_in_bounds() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let c = Celebration::new(Instant::now(), Duration::from_secs(3));
        CelebrationWidget::new(&c, Instant::now()).render(area, &mut buf);
    }
}
