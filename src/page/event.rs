use super::document::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

/// A dispatched page event. Handlers mutate the flags in place; the
/// dispatcher consults them between listener steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    kind: EventKind,
    target: NodeId,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl DomEvent {
    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn submit(target: NodeId) -> Self {
        Self::new(EventKind::Submit, target)
    }

    fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Element the event was originally dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
