#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Visible,
    Hidden,
}

impl HeaderState {
    /// Class the header carries in this state.
    pub fn class(self) -> &'static str {
        match self {
            HeaderState::Visible => "visible",
            HeaderState::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    /// Offsets below this always show the header.
    pub top: f64,
    /// Movements up to this many pixels are ignored.
    pub delta: f64,
    pub mobile_breakpoint: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            top: 100.0,
            delta: 5.0,
            mobile_breakpoint: 768.0,
        }
    }
}

/// Header visibility plus the floating menu button that replaces it on phones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub header: HeaderState,
    pub floating_active: bool,
    last_offset: f64,
}

impl NavState {
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Shows the header and retires the floating button.
    pub fn reveal(&mut self) {
        self.header = HeaderState::Visible;
        self.floating_active = false;
    }
}

/// Computes the header state for a new scroll sample.
///
/// The reference offset only moves when the sample travelled further than
/// `thresholds.delta`, so slow scrolling accumulates until it counts.
pub fn next_header_state(
    state: NavState,
    offset: f64,
    viewport_width: f64,
    thresholds: &ScrollThresholds,
) -> NavState {
    let mut next = state;

    if offset < thresholds.top {
        next.reveal();
        return next;
    }

    if (offset - state.last_offset).abs() <= thresholds.delta {
        return next;
    }

    if offset > state.last_offset {
        next.header = HeaderState::Hidden;
        if viewport_width <= thresholds.mobile_breakpoint {
            next.floating_active = true;
        }
    } else {
        next.reveal();
    }
    next.last_offset = offset.max(0.0);
    next
}

/// Coalesces bursts of scroll events into one handling pass per interval.
///
/// `request` answers whether the caller should schedule a pass; `release` is
/// called by that pass once it has run.
#[derive(Debug, Default)]
pub struct Throttle {
    pending: bool,
}

impl Throttle {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn release(&mut self) {
        self.pending = false;
    }
}
