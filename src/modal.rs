//! The product-detail modal: one owned view slot with an open/closed state
//! machine.
//!
//! The page has exactly one modal container. `ProductModal` owns the handle
//! to it (`ModalSurface`) and is the only code that touches it, so opening a
//! product while another is visible replaces the view instead of stacking a
//! second one. Every way of closing the modal arrives through
//! [`ProductModal::handle_event`], which the UI layer registers once when the
//! modal is constructed.

use crate::catalog::{ProductId, ProductIndex, ProductRecord};
use crate::contact::{ContactChannel, ContactHandoff, Handoff, contact_for_product};
use crate::render::{DetailAction, render_detail};

const ESCAPE_KEY: &str = "Escape";

/// Display surface owned by the UI layer.
pub trait ModalSurface {
    /// Replace the modal body with `markup` and make the container visible.
    fn show(&mut self, markup: &str);
    /// Hide the modal container.
    fn hide(&mut self);
    /// Suspend or restore scrolling of the page behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Transient view state of the single modal.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModalViewState {
    pub visible_product_id: Option<ProductId>,
    pub is_open: bool,
}

/// Input routed to the modal by the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalEvent<'a> {
    /// A product card's detail control was activated.
    Trigger { product_id: &'a str },
    /// A button inside the rendered detail view was pressed.
    Action(DetailAction),
    /// The container's own close control (the `×` in the corner).
    CloseButton,
    /// A click landed on the overlay; `inside_content` is true when it hit
    /// the detail card rather than the backdrop.
    OverlayClick { inside_content: bool },
    KeyDown { key: &'a str },
    /// The page is being left or the view is being torn down.
    NavigateAway,
}

/// Catalog-backed detail modal.
pub struct ProductModal<'c, S, H> {
    catalog: &'c ProductIndex,
    surface: S,
    handoff: H,
    channel: ContactChannel,
    state: ModalViewState,
}

impl<'c, S: ModalSurface, H: ContactHandoff> ProductModal<'c, S, H> {
    pub fn new(catalog: &'c ProductIndex, surface: S, handoff: H, channel: ContactChannel) -> Self {
        Self {
            catalog,
            surface,
            handoff,
            channel,
            state: ModalViewState::default(),
        }
    }

    /// Show the detail view for `product_id`.
    ///
    /// Any product already on screen is closed first. Unknown ids are logged
    /// and leave the modal closed; they never escape as an error. Returns
    /// whether the modal ended up open.
    pub fn open_modal(&mut self, product_id: &str) -> bool {
        self.close_modal();

        let product = match self.catalog.get_product(product_id) {
            Ok(product) => product,
            Err(err) => {
                tracing::warn!(%err, "ignoring product modal trigger");
                return false;
            }
        };

        let markup = render_detail(product);
        self.surface.show(&markup);
        self.surface.set_scroll_locked(true);
        self.state = ModalViewState {
            visible_product_id: Some(product.id.clone()),
            is_open: true,
        };
        tracing::debug!(product = %product.id, "product modal opened");
        true
    }

    /// Hide the modal and restore page scrolling.
    ///
    /// Calling this while already closed does nothing. Returns whether a
    /// visible modal was closed.
    pub fn close_modal(&mut self) -> bool {
        if !self.state.is_open {
            return false;
        }
        self.surface.hide();
        self.surface.set_scroll_locked(false);
        if let Some(id) = self.state.visible_product_id.take() {
            tracing::debug!(product = %id, "product modal closed");
        }
        self.state.is_open = false;
        true
    }

    /// Hand off an enquiry about the product on screen.
    ///
    /// The modal stays open; returns `None` when nothing is visible.
    pub fn contact_visible_product(&mut self) -> Option<Handoff> {
        let title = self.visible_product()?.title.clone();
        let handoff = contact_for_product(&self.channel, &title);
        tracing::debug!(url = %handoff.url, "handing off product enquiry");
        self.handoff.hand_off(&handoff);
        Some(handoff)
    }

    /// Route one page event through the state machine.
    pub fn handle_event(&mut self, event: ModalEvent<'_>) {
        match event {
            ModalEvent::Trigger { product_id } => {
                self.open_modal(product_id);
            }
            ModalEvent::Action(DetailAction::Contact) => {
                self.contact_visible_product();
            }
            ModalEvent::Action(DetailAction::Close)
            | ModalEvent::CloseButton
            | ModalEvent::NavigateAway
            | ModalEvent::OverlayClick {
                inside_content: false,
            } => {
                self.close_modal();
            }
            ModalEvent::OverlayClick {
                inside_content: true,
            } => {}
            ModalEvent::KeyDown { key } => {
                if key == ESCAPE_KEY {
                    self.close_modal();
                }
            }
        }
    }

    pub fn state(&self) -> &ModalViewState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// The record currently on screen, if any.
    pub fn visible_product(&self) -> Option<&'c ProductRecord> {
        let catalog: &'c ProductIndex = self.catalog;
        let id = self.state.visible_product_id.as_ref()?;
        catalog.get_product(id.as_str()).ok()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn handoff(&self) -> &H {
        &self.handoff
    }
}
