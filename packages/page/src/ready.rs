/// `document.readyState`, which the browser reports as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values are treated as still loading, so callers wait for the event.
    pub fn parse(state: &str) -> Self {
        match state {
            "interactive" => Self::Interactive,
            "complete" => Self::Complete,
            _ => Self::Loading,
        }
    }

    /// `DOMContentLoaded` has already been dispatched.
    pub fn is_parsed(self) -> bool {
        self != Self::Loading
    }

    /// `load` has already been dispatched.
    pub fn is_loaded(self) -> bool {
        self == Self::Complete
    }
}
