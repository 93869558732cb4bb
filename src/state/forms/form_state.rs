//! Focus and input handling for the inquiry form

use crate::inquiry::{cycle_choice, FieldKind, InquiryField, InquiryForm};
use std::time::Duration;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button, one past the last field
pub const SUBMIT_BUTTON_INDEX: usize = InquiryField::ALL.len();

/// The inquiry form plus where the cursor is
#[derive(Debug, Clone)]
pub struct InquiryFormState {
    pub form: InquiryForm,
    pub active_field_index: usize,
    /// Fields flagged by the last rejected submit; cleared on edit
    pub invalid_fields: Vec<InquiryField>,
}

impl InquiryFormState {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            form: InquiryForm::with_notification_duration(notification_duration),
            active_field_index: 0,
            invalid_fields: Vec::new(),
        }
    }

    /// Field under the cursor, `None` on the submit button
    pub fn active(&self) -> Option<InquiryField> {
        InquiryField::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn is_invalid(&self, field: InquiryField) -> bool {
        self.invalid_fields.contains(&field)
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active() else { return };
        if field.kind() == FieldKind::Choice {
            return;
        }
        let mut value = self.form.record().get(field).to_string();
        value.push(c);
        self.apply(field, value);
    }

    /// Line break in multiline fields; ignored elsewhere
    pub fn input_newline(&mut self) {
        if self.active().is_some_and(|f| f.kind() == FieldKind::Multiline) {
            self.input_char('\n');
        }
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active() else { return };
        if field.kind() == FieldKind::Choice {
            return;
        }
        let mut value = self.form.record().get(field).to_string();
        if value.pop().is_some() {
            self.apply(field, value);
        }
    }

    /// Empty the active field (choice fields go back to "unselected")
    pub fn clear_active(&mut self) {
        if let Some(field) = self.active() {
            self.apply(field, String::new());
        }
    }

    /// Step the active choice field to its next or previous option
    pub fn cycle_active_choice(&mut self, forward: bool) {
        let Some(field) = self.active() else { return };
        let current = self.form.record().get(field);
        if let Some(next) = cycle_choice(field, current, forward) {
            self.apply(field, next.to_string());
        }
    }

    fn apply(&mut self, field: InquiryField, value: String) {
        self.form.update_field(field, value);
        self.invalid_fields.retain(|f| *f != field);
    }
}

impl Default for InquiryFormState {
    fn default() -> Self {
        Self::new(crate::inquiry::DEFAULT_NOTIFICATION_DURATION)
    }
}

impl Form for InquiryFormState {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus(state: &mut InquiryFormState, field: InquiryField) {
        let index = InquiryField::ALL.iter().position(|f| *f == field).unwrap();
        state.set_active_field(index);
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let state = InquiryFormState::default();
        assert_eq!(state.active_field_index, 0);
        assert_eq!(state.active(), Some(InquiryField::FirstName));
        assert!(state.invalid_fields.is_empty());
        assert!(!state.form.is_submitting());
    }

    #[test]
    fn test_field_count_includes_button() {
        let state = InquiryFormState::default();
        assert_eq!(state.field_count(), 13);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut state = InquiryFormState::default();
        for _ in 0..13 {
            state.next_field();
        }
        assert_eq!(state.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_button() {
        let mut state = InquiryFormState::default();
        state.prev_field();
        assert!(state.is_submit_button_active());
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut state = InquiryFormState::default();
        state.set_active_field(100);
        assert_eq!(state.active_field_index, SUBMIT_BUTTON_INDEX);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut state = InquiryFormState::default();
        state.input_char('A');
        state.input_char('d');
        state.input_char('a');
        state.backspace();
        assert_eq!(state.form.record().first_name, "Ad");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut state = InquiryFormState::default();
        state.backspace();
        assert_eq!(state.form.record().first_name, "");
    }

    #[test]
    fn test_typing_ignored_on_choice_and_button() {
        let mut state = InquiryFormState::default();
        focus(&mut state, InquiryField::Budget);
        state.input_char('x');
        assert_eq!(state.form.record().budget, "");

        state.set_active_field(SUBMIT_BUTTON_INDEX);
        state.input_char('x');
        assert_eq!(state.form.record(), &Default::default());
    }

    #[test]
    fn test_newline_only_in_multiline_fields() {
        let mut state = InquiryFormState::default();
        state.input_newline();
        assert_eq!(state.form.record().first_name, "");

        focus(&mut state, InquiryField::Objectives);
        state.input_char('a');
        state.input_newline();
        state.input_char('b');
        assert_eq!(state.form.record().objectives, "a\nb");
    }

    #[test]
    fn test_cycle_active_choice() {
        let mut state = InquiryFormState::default();
        focus(&mut state, InquiryField::Timeline);
        state.cycle_active_choice(true);
        assert_eq!(state.form.record().timeline, "urgent");
        state.cycle_active_choice(true);
        assert_eq!(state.form.record().timeline, "standard");
        state.cycle_active_choice(false);
        assert_eq!(state.form.record().timeline, "urgent");
    }

    #[test]
    fn test_cycle_on_text_field_is_noop() {
        let mut state = InquiryFormState::default();
        state.cycle_active_choice(true);
        assert_eq!(state.form.record().first_name, "");
    }

    #[test]
    fn test_clear_active() {
        let mut state = InquiryFormState::default();
        focus(&mut state, InquiryField::Service);
        state.cycle_active_choice(true);
        state.clear_active();
        assert_eq!(state.form.record().service, "");
    }

    #[test]
    fn test_editing_clears_invalid_flag() {
        let mut state = InquiryFormState::default();
        state.invalid_fields = vec![InquiryField::FirstName, InquiryField::Email];
        state.input_char('A');
        assert!(!state.is_invalid(InquiryField::FirstName));
        assert!(state.is_invalid(InquiryField::Email));
    }
}
