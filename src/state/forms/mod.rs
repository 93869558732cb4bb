//! Form domain layer
//!
//! Focus, input and presentation helpers for the inquiry form view.

mod field;
mod form_state;

pub use field::{display_value, label, placeholder};
pub use form_state::{Form, InquiryFormState};

#[cfg(test)]
pub use form_state::SUBMIT_BUTTON_INDEX;
