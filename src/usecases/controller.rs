//! Interaction controller for the student dashboard.
//!
//! The controller binds to the page once, owns one [`Overlay`] per
//! interactive element and mirrors every state change onto the page as a CSS
//! marker. Clicks are dispatched the way a browser would: target and
//! ancestors first, then the document listener, then the window listener,
//! with `stop_propagation` cutting the chain short.

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;

use crate::{
    domain::{
        card_list::CardList,
        class_card::{pick_header_image, ClassCard},
        dashboard_view::{CardView, DashboardView},
        overlay::Overlay,
    },
    infra::contracts::JoinAnnouncer,
    page::{
        dashboard::DashboardElements,
        event::DomEvent,
        NodeId, PageDocument, PageError, Selector,
    },
};

use super::{
    card_builder::{build_card_element, CARD_CLASS, OPACITY, VISIBLE_OPACITY},
    deferred::{DeferredQueue, DeferredTask},
};

/// Shown when the join form is submitted without a code.
pub const EMPTY_CODE_NOTICE: &str = "Please enter a class code.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined { card_index: usize },
    Rejected { notice: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSubmission {
    pub event: DomEvent,
    pub outcome: SubmitOutcome,
}

pub struct DashboardController<D, R, A> {
    document: D,
    elements: DashboardElements,
    sidebar: Overlay,
    dropdown: Overlay,
    modal: Overlay,
    cards: CardList,
    card_nodes: Vec<NodeId>,
    deferred: DeferredQueue,
    fade_in_delay: Duration,
    rng: R,
    announcer: A,
}

impl<D, R, A> DashboardController<D, R, A>
where
    D: PageDocument,
    R: Rng,
    A: JoinAnnouncer,
{
    /// Acquires every required element and adopts the markers already
    /// present on the page as initial overlay states.
    pub fn bind(document: D, rng: R, announcer: A, fade_in_delay: Duration) -> Result<Self, PageError> {
        let elements = DashboardElements::bind(&document)?;

        let mut sidebar = Overlay::sidebar();
        let mut dropdown = Overlay::dropdown();
        let mut modal = Overlay::modal();
        for (overlay, node) in [
            (&mut sidebar, elements.sidebar),
            (&mut dropdown, elements.profile_dropdown),
            (&mut modal, elements.modal),
        ] {
            if document.has_class(node, overlay.marker().class_name()) {
                overlay.open();
            }
        }

        tracing::debug!(
            sidebar_expanded = sidebar.is_active(),
            dropdown_shown = dropdown.is_active(),
            modal_shown = modal.is_active(),
            "dashboard controller bound"
        );

        Ok(Self {
            document,
            elements,
            sidebar,
            dropdown,
            modal,
            cards: CardList::default(),
            card_nodes: Vec::new(),
            deferred: DeferredQueue::default(),
            fade_in_delay,
            rng,
            announcer,
        })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn elements(&self) -> &DashboardElements {
        &self.elements
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn sidebar(&self) -> &Overlay {
        &self.sidebar
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn dropdown(&self) -> &Overlay {
        &self.dropdown
    }

    pub fn modal(&self) -> &Overlay {
        &self.modal
    }

    pub fn cards(&self) -> &CardList {
        &self.cards
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    /// Dispatches a click on `target` through the element, document and
    /// window listeners.
    pub fn dispatch_click(&mut self, target: NodeId) -> Result<DomEvent> {
        if self.document.tag(target).is_none() {
            return Err(PageError::UnknownNode(target).into());
        }

        let mut event = DomEvent::click(target);

        for node in self.document.path_to_root(target) {
            self.on_element_click(node, &mut event)?;
            if event.propagation_stopped() {
                return Ok(event);
            }
        }

        self.auto_close_dropdown()?;

        if event.target() == self.elements.modal {
            self.close_modal()?;
        }

        Ok(event)
    }

    fn on_element_click(&mut self, node: NodeId, event: &mut DomEvent) -> Result<()> {
        let elements = self.elements;

        if node == elements.hamburger {
            self.toggle_sidebar()?;
        } else if node == elements.profile_icon {
            event.stop_propagation();
            self.toggle_dropdown()?;
        } else if node == elements.join_class_button {
            self.open_modal()?;
        } else if node == elements.close_modal || node == elements.cancel_button {
            self.close_modal()?;
        }

        Ok(())
    }

    pub fn toggle_sidebar(&mut self) -> Result<()> {
        let expanded = self.sidebar.toggle();
        mirror(&mut self.document, self.elements.sidebar, &self.sidebar)?;
        tracing::debug!(expanded, "sidebar toggled");
        Ok(())
    }

    pub fn toggle_dropdown(&mut self) -> Result<()> {
        let shown = self.dropdown.toggle();
        mirror(&mut self.document, self.elements.profile_dropdown, &self.dropdown)?;
        tracing::debug!(shown, "profile dropdown toggled");
        Ok(())
    }

    /// Hides the dropdown if shown; no-op otherwise.
    pub fn auto_close_dropdown(&mut self) -> Result<()> {
        if self.dropdown.close() {
            mirror(&mut self.document, self.elements.profile_dropdown, &self.dropdown)?;
            tracing::debug!("profile dropdown closed by outside click");
        }
        Ok(())
    }

    pub fn open_modal(&mut self) -> Result<()> {
        if self.modal.open() {
            mirror(&mut self.document, self.elements.modal, &self.modal)?;
            tracing::debug!("join class modal opened");
        }
        Ok(())
    }

    /// Hides the modal. The form keeps whatever was typed.
    pub fn close_modal(&mut self) -> Result<()> {
        if self.modal.close() {
            mirror(&mut self.document, self.elements.modal, &self.modal)?;
            tracing::debug!("join class modal closed");
        }
        Ok(())
    }

    pub fn class_code(&self) -> &str {
        self.document
            .value(self.elements.class_code_input)
            .unwrap_or_default()
    }

    pub fn type_class_code(&mut self, ch: char) -> Result<()> {
        let mut value = self.class_code().to_owned();
        value.push(ch);
        self.document
            .set_value(self.elements.class_code_input, &value)?;
        Ok(())
    }

    pub fn erase_class_code_char(&mut self) -> Result<()> {
        let mut value = self.class_code().to_owned();
        if value.pop().is_some() {
            self.document
                .set_value(self.elements.class_code_input, &value)?;
        }
        Ok(())
    }

    /// Handles a submit of the join-class form.
    ///
    /// The default submission is always prevented. A non-empty code is
    /// announced, turned into a card, and then the modal closes and the form
    /// resets. An empty code leaves everything as it was.
    pub fn submit_join_form(&mut self, now: Instant) -> Result<JoinSubmission> {
        let mut event = DomEvent::submit(self.elements.join_class_form);
        event.prevent_default();

        let class_code = self.class_code().trim().to_owned();
        if class_code.is_empty() {
            tracing::warn!("join form submitted without a class code");
            return Ok(JoinSubmission {
                event,
                outcome: SubmitOutcome::Rejected {
                    notice: EMPTY_CODE_NOTICE,
                },
            });
        }

        self.announcer.announce_join(&class_code)?;
        let card_index = self.create_class_card(&class_code, now)?;
        self.close_modal()?;
        self.document.reset_form(self.elements.join_class_form)?;

        Ok(JoinSubmission {
            event,
            outcome: SubmitOutcome::Joined { card_index },
        })
    }

    /// Appends a card for `class_code` and schedules its fade-in.
    pub fn create_class_card(&mut self, class_code: &str, now: Instant) -> Result<usize> {
        let stagger_index = self
            .document
            .query_all(&Selector::class(CARD_CLASS))
            .len();
        let header_image = pick_header_image(&mut self.rng);
        let card = ClassCard::new(class_code, header_image, stagger_index);

        let node = build_card_element(&mut self.document, &card)?;
        self.document
            .append_child(self.elements.cards_container, node)?;
        self.deferred
            .schedule(now + self.fade_in_delay, DeferredTask::FadeIn(node));

        tracing::debug!(stagger_index, header_image, "class card appended");

        self.card_nodes.push(node);
        Ok(self.cards.push(card))
    }

    /// Runs every deferred task due at `now`. Returns how many ran.
    pub fn run_deferred(&mut self, now: Instant) -> Result<usize> {
        let due = self.deferred.take_due(now);
        for task in &due {
            match task {
                DeferredTask::FadeIn(node) => {
                    self.document.set_style(*node, OPACITY, VISIBLE_OPACITY)?
                }
            }
        }
        Ok(due.len())
    }

    pub fn is_card_visible(&self, index: usize) -> bool {
        self.card_nodes
            .get(index)
            .and_then(|node| self.document.style(*node, OPACITY))
            == Some(VISIBLE_OPACITY)
    }

    pub fn view(&self) -> DashboardView<'_> {
        let texts = |node: NodeId| {
            self.document
                .children(node)
                .into_iter()
                .filter_map(|child| self.document.text(child))
                .collect::<Vec<_>>()
        };

        DashboardView {
            sidebar_expanded: self.sidebar.is_active(),
            dropdown_shown: self.dropdown.is_active(),
            modal_shown: self.modal.is_active(),
            class_code: self.class_code(),
            sidebar_links: texts(self.elements.sidebar),
            dropdown_items: texts(self.elements.profile_dropdown),
            cards: self
                .cards
                .cards()
                .iter()
                .enumerate()
                .map(|(index, card)| CardView {
                    card,
                    visible: self.is_card_visible(index),
                })
                .collect(),
        }
    }
}

fn mirror<D>(document: &mut D, node: NodeId, overlay: &Overlay) -> Result<(), PageError>
where
    D: PageDocument,
{
    document.set_class(node, overlay.marker().class_name(), overlay.is_active())
}
