//! Pre-filled contact links for a product.
//!
//! Building the link is pure string formatting; actually following it
//! (opening the mail client, a messaging app, or the contact page) belongs to
//! the UI layer behind [`ContactHandoff`].

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTACT_ADDRESS: &str = "info@mesamalzemecilik.com";
pub const DEFAULT_CONTACT_SUBJECT: &str = "Ürün Bilgi Talebi";

/// Where product enquiries are sent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum ContactChannel {
    /// `mailto:` link with the message in the body.
    Email { address: String, subject: String },
    /// `wa.me` link with the message as pre-filled text. `phone` is the
    /// international number without `+` or spaces.
    #[serde(rename = "whatsapp")]
    WhatsApp { phone: String },
    /// Plain redirect to the site's contact page.
    ContactPage { url: String },
}

impl Default for ContactChannel {
    fn default() -> Self {
        ContactChannel::Email {
            address: DEFAULT_CONTACT_ADDRESS.to_string(),
            subject: DEFAULT_CONTACT_SUBJECT.to_string(),
        }
    }
}

/// Result of preparing a product enquiry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Handoff {
    /// Human-readable message embedding the product title verbatim.
    pub message: String,
    /// Link for the external channel with `message` URL-escaped into it.
    pub url: String,
}

/// Receives finished contact links. Implemented by the UI layer.
pub trait ContactHandoff {
    fn hand_off(&mut self, handoff: &Handoff);
}

/// Message sent for an enquiry about `title`.
pub fn contact_message(title: &str) -> String {
    format!("Merhaba, {title} hakkında bilgi almak istiyorum.")
}

/// Build the enquiry for `title` on `channel`.
pub fn contact_for_product(channel: &ContactChannel, title: &str) -> Handoff {
    let message = contact_message(title);
    let encoded = urlencoding::encode(&message);
    let url = match channel {
        ContactChannel::Email { address, subject } => format!(
            "mailto:{address}?subject={}&body={encoded}",
            urlencoding::encode(subject)
        ),
        ContactChannel::WhatsApp { phone } => format!("https://wa.me/{phone}?text={encoded}"),
        ContactChannel::ContactPage { url } => url.clone(),
    };
    Handoff { message, url }
}
