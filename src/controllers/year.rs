use chrono::Datelike;

use crate::dom::Document;
use crate::page::YEAR_ID;

/// Write the current year into `#year`. Returns false when the element is absent.
pub fn stamp(doc: &mut Document) -> bool {
    stamp_with(doc, chrono::Local::now().year())
}

pub fn stamp_with(doc: &mut Document, year: i32) -> bool {
    match doc.by_id(YEAR_ID) {
        Some(el) => {
            doc.set_text(el, &year.to_string());
            true
        }
        None => false,
    }
}
