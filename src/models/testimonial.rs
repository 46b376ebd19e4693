use serde_json::Value;

use super::text_field;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Testimonial {
    pub quote: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl Testimonial {
    pub fn from_value(v: &Value) -> Self {
        if !v.is_object() {
            return Testimonial::default();
        }
        Testimonial {
            quote: text_field(v, "quote"),
            name: text_field(v, "name"),
            role: text_field(v, "role"),
        }
    }

    /// Non-array payloads yield an empty list.
    pub fn list_from_value(v: &Value) -> Vec<Testimonial> {
        v.as_array()
            .map(|items| items.iter().map(Testimonial::from_value).collect())
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Anonymous")
    }
}
