//! Project inquiry domain: the record, the form state machine and the
//! boundaries it talks to (notification sink and submission transport).

mod form;
mod notify;
mod record;
pub mod transport;

pub use form::{
    FormPhase, InquiryForm, PendingSubmission, SubmitError, SubmitOutcome,
    DEFAULT_NOTIFICATION_DURATION,
};
pub use notify::{ChannelSink, Notification, NotificationKind};
pub use record::{choice_label, cycle_choice, FieldKind, InquiryField, InquiryRecord};
