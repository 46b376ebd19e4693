use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::dom::{Document, ElementId};
use crate::page::CONTACT_FORM_ID;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Turns a contact form submission into a `mailto:` navigation.
#[derive(Debug, Clone)]
pub struct ContactComposer {
    form: ElementId,
    recipient: String,
}

impl ContactComposer {
    pub fn bind(doc: &Document, recipient: &str) -> Option<Self> {
        let form = doc.by_id(CONTACT_FORM_ID)?;
        Some(ContactComposer { form, recipient: recipient.to_string() })
    }

    /// Handle a submit. Returns the mailto URI when `target` is our form.
    pub fn on_submit(&self, doc: &Document, target: ElementId) -> Option<String> {
        if target != self.form {
            return None;
        }
        let field = |name: &str| doc.form_field(self.form, name).unwrap_or("").trim().to_string();
        Some(compose_mailto(
            &self.recipient,
            &field("name"),
            &field("email"),
            &field("message"),
        ))
    }
}

pub fn compose_mailto(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let sender = if name.is_empty() { "Visitor" } else { name };
    let subject = format!("Portfolio Inquiry — {}", sender);
    let body = format!("Name: {}\nEmail: {}\n\nMessage:\n{}\n", name, email, message);
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        utf8_percent_encode(&subject, COMPONENT),
        utf8_percent_encode(&body, COMPONENT)
    )
}
