//! Count-up animation for the statistic cards.

/// Interval between two animation frames, in milliseconds.
pub const TICK_MS: u64 = 16;

/// Class left on a number once it has been animated.
pub const ANIMATED_CLASS: &str = "animated";

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    frame: u32,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / TICK_MS as f64;
        let increment = if ticks > 0.0 {
            f64::from(target) / ticks
        } else {
            f64::from(target)
        };
        Self {
            target,
            increment,
            frame: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one frame and returns the text to display, or `None` once finished.
    pub fn tick(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.frame += 1;
        let value = self.increment * f64::from(self.frame);
        if value >= f64::from(self.target) {
            self.finished = true;
            return Some(format!("+{}", self.target));
        }
        Some(format!("+{}", value.floor() as u64))
    }
}

/// Reads the number a statistic shows, e.g. `"+150"` or `"98%"`.
pub fn parse_stat(text: &str) -> Option<u32> {
    let cleaned = text.replace('+', "");
    let digits: String = cleaned
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// The persistent "already animated" flag of a statistic element.
pub trait CounterMarker {
    fn is_animated(&self) -> bool;
    fn mark_animated(&mut self);
}

/// Starts the animation for a statistic that just became visible.
///
/// Returns `None` when the element was animated before or shows no number.
pub fn start_counter<M: CounterMarker>(
    marker: &mut M,
    text: &str,
    duration_ms: u32,
) -> Option<CounterAnimation> {
    if marker.is_animated() {
        return None;
    }
    let target = parse_stat(text)?;
    marker.mark_animated();
    Some(CounterAnimation::new(target, duration_ms))
}
