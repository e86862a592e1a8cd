//! Binary visibility state for the sidebar, the profile dropdown and the
//! join-class modal.
//!
//! Each overlay owns the single authoritative boolean for its element. The
//! page only mirrors it through a CSS state marker.

/// CSS class that styling rules interpret as "this overlay is active".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMarker {
    /// Sidebar is widened with labels.
    Expanded,
    /// Dropdown or modal is visible.
    Show,
}

impl StateMarker {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Show => "show",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    marker: StateMarker,
    active: bool,
}

impl Overlay {
    /// Collapsed sidebar.
    pub fn sidebar() -> Self {
        Self::new(StateMarker::Expanded)
    }

    /// Hidden profile dropdown.
    pub fn dropdown() -> Self {
        Self::new(StateMarker::Show)
    }

    /// Hidden join-class modal.
    pub fn modal() -> Self {
        Self::new(StateMarker::Show)
    }

    fn new(marker: StateMarker) -> Self {
        Self {
            marker,
            active: false,
        }
    }

    pub fn marker(&self) -> StateMarker {
        self.marker
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activates the overlay. Returns true when the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    /// Deactivates the overlay. Returns true when the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    /// Flips the overlay and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_start_inactive_with_their_markers() {
        assert!(!Overlay::sidebar().is_active());
        assert_eq!(Overlay::sidebar().marker().class_name(), "expanded");
        assert_eq!(Overlay::dropdown().marker().class_name(), "show");
        assert_eq!(Overlay::modal().marker(), StateMarker::Show);
    }

    #[test]
    fn toggle_is_parity_based() {
        let mut sidebar = Overlay::sidebar();

        for _ in 0..4 {
            sidebar.toggle();
        }
        assert!(!sidebar.is_active());

        for _ in 0..3 {
            sidebar.toggle();
        }
        assert!(sidebar.is_active());
    }

    #[test]
    fn open_and_close_report_changes_only_on_transitions() {
        let mut modal = Overlay::modal();

        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.is_active());

        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.is_active());
    }
}
