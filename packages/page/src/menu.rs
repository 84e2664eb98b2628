use crate::NavState;

/// Where a document click landed relative to the menu controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickHit {
    pub in_panel: bool,
    pub in_toggle: bool,
    pub in_floating: bool,
}

/// Open/closed state shared by the nav panel, the hamburger and the backdrop.
#[derive(Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu. Opening it hides the floating button.
    pub fn toggle(&mut self, nav: &mut NavState) -> bool {
        self.open = !self.open;
        if self.open {
            nav.floating_active = false;
        }
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the menu when a click lands outside every menu control.
    pub fn click(&mut self, hit: ClickHit) -> bool {
        if !self.open || hit.in_panel || hit.in_toggle || hit.in_floating {
            return false;
        }
        self.open = false;
        true
    }

    /// Leaving the mobile layout closes the menu and the floating button.
    pub fn resize(&mut self, nav: &mut NavState, viewport_width: f64, breakpoint: f64) -> bool {
        if viewport_width <= breakpoint {
            return false;
        }
        self.open = false;
        nav.floating_active = false;
        true
    }
}
