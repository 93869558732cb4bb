//! How field values are presented

use crate::inquiry::{choice_label, FieldKind, InquiryField};

/// Text to render for a stored value
pub fn display_value(field: InquiryField, value: &str) -> String {
    match field.kind() {
        FieldKind::Choice => match choice_label(field, value) {
            Some(label) => label.to_string(),
            None if value.is_empty() => String::new(),
            None => value.to_string(),
        },
        FieldKind::Text | FieldKind::Multiline => value.to_string(),
    }
}

/// Hint shown in an empty, unfocused field
pub fn placeholder(field: InquiryField) -> &'static str {
    match field {
        InquiryField::Service => "Select a service...",
        InquiryField::Budget => "Select a budget range...",
        InquiryField::Timeline => "Select timeline...",
        InquiryField::Location => "e.g. Lagos, Abuja, International",
        InquiryField::Objectives => {
            "Project goals, target audience, cultural considerations, specific requirements..."
        }
        InquiryField::Inspiration => {
            "Inspiration, previous work you admire, cultural elements to incorporate..."
        }
        _ => "(empty)",
    }
}

/// Label with a required marker
pub fn label(field: InquiryField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}
