//! Inquiry record, field catalogue and validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Everything the visitor has typed into the inquiry form.
///
/// Every field is always present; an untouched field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub location: String,
    pub objectives: String,
    pub inspiration: String,
}

impl InquiryRecord {
    /// Read a field by key
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::FirstName => &self.first_name,
            InquiryField::LastName => &self.last_name,
            InquiryField::Company => &self.company,
            InquiryField::Position => &self.position,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::Service => &self.service,
            InquiryField::Budget => &self.budget,
            InquiryField::Timeline => &self.timeline,
            InquiryField::Location => &self.location,
            InquiryField::Objectives => &self.objectives,
            InquiryField::Inspiration => &self.inspiration,
        }
    }

    /// Replace a field by key
    pub fn set(&mut self, field: InquiryField, value: String) {
        let slot = match field {
            InquiryField::FirstName => &mut self.first_name,
            InquiryField::LastName => &mut self.last_name,
            InquiryField::Company => &mut self.company,
            InquiryField::Position => &mut self.position,
            InquiryField::Email => &mut self.email,
            InquiryField::Phone => &mut self.phone,
            InquiryField::Service => &mut self.service,
            InquiryField::Budget => &mut self.budget,
            InquiryField::Timeline => &mut self.timeline,
            InquiryField::Location => &mut self.location,
            InquiryField::Objectives => &mut self.objectives,
            InquiryField::Inspiration => &mut self.inspiration,
        };
        *slot = value;
    }

    /// Check the record the way the form's `required` attributes would.
    ///
    /// Returns every problem found, in field order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut issues = Vec::new();

        for field in InquiryField::ALL {
            let value = self.get(field);

            if value.trim().is_empty() {
                if field.is_required() {
                    issues.push(ValidationIssue {
                        field,
                        problem: Problem::Missing,
                    });
                }
                continue;
            }

            let problem = match field {
                InquiryField::Email if !is_email_shaped(value) => Some(Problem::InvalidEmail),
                InquiryField::Service if ServiceInterest::from_value(value).is_none() => {
                    Some(Problem::UnknownChoice)
                }
                InquiryField::Budget if BudgetRange::from_value(value).is_none() => {
                    Some(Problem::UnknownChoice)
                }
                InquiryField::Timeline if Timeline::from_value(value).is_none() => {
                    Some(Problem::UnknownChoice)
                }
                _ => None,
            };

            if let Some(problem) = problem {
                issues.push(ValidationIssue { field, problem });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(issues))
        }
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Choice,
}

/// Key of a single inquiry field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryField {
    FirstName,
    LastName,
    Company,
    Position,
    Email,
    Phone,
    Service,
    Budget,
    Timeline,
    Location,
    Objectives,
    Inspiration,
}

impl InquiryField {
    /// All fields in form order
    pub const ALL: [InquiryField; 12] = [
        Self::FirstName,
        Self::LastName,
        Self::Company,
        Self::Position,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::Budget,
        Self::Timeline,
        Self::Location,
        Self::Objectives,
        Self::Inspiration,
    ];

    /// Wire name, matching the serialized record keys
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Company => "company",
            Self::Position => "position",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Location => "location",
            Self::Objectives => "objectives",
            Self::Inspiration => "inspiration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Company => "Company",
            Self::Position => "Your Position",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Service => "Service Interest",
            Self::Budget => "Project Budget Range (₦)",
            Self::Timeline => "Desired Timeline",
            Self::Location => "Project Location",
            Self::Objectives => "Project Objectives & Vision",
            Self::Inspiration => "Inspiration & References",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone | Self::Location | Self::Inspiration)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Service | Self::Budget | Self::Timeline => FieldKind::Choice,
            Self::Objectives | Self::Inspiration => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no inquiry field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inquiry field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for InquiryField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A closed set of values offered by a select or radio group
pub trait ChoiceOption: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// Submitted value
    fn value(self) -> &'static str;

    /// Text shown to the visitor
    fn label(self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceInterest {
    BespokeGifts,
    BrandDevelopment,
    ExecutiveMerchandise,
    StrategicPartnerships,
    Multiple,
    Consultation,
}

impl ChoiceOption for ServiceInterest {
    const ALL: &'static [Self] = &[
        Self::BespokeGifts,
        Self::BrandDevelopment,
        Self::ExecutiveMerchandise,
        Self::StrategicPartnerships,
        Self::Multiple,
        Self::Consultation,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::BespokeGifts => "bespoke-gifts",
            Self::BrandDevelopment => "brand-development",
            Self::ExecutiveMerchandise => "executive-merchandise",
            Self::StrategicPartnerships => "strategic-partnerships",
            Self::Multiple => "multiple",
            Self::Consultation => "consultation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::BespokeGifts => "Bespoke Gift Curation",
            Self::BrandDevelopment => "Premium Brand Development",
            Self::ExecutiveMerchandise => "Executive Merchandise",
            Self::StrategicPartnerships => "Strategic Partnership Gifts",
            Self::Multiple => "Multiple Services",
            Self::Consultation => "General Consultation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    From15To25M,
    From25To50M,
    From50To100M,
    Over100M,
}

impl ChoiceOption for BudgetRange {
    const ALL: &'static [Self] = &[
        Self::From15To25M,
        Self::From25To50M,
        Self::From50To100M,
        Self::Over100M,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::From15To25M => "15-25M",
            Self::From25To50M => "25-50M",
            Self::From50To100M => "50-100M",
            Self::Over100M => "100M+",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::From15To25M => "₦15-25M",
            Self::From25To50M => "₦25-50M",
            Self::From50To100M => "₦50-100M",
            Self::Over100M => "₦100M+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    Urgent,
    Standard,
    Extended,
    Flexible,
}

impl ChoiceOption for Timeline {
    const ALL: &'static [Self] = &[
        Self::Urgent,
        Self::Standard,
        Self::Extended,
        Self::Flexible,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Standard => "standard",
            Self::Extended => "extended",
            Self::Flexible => "flexible",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent (2-4 weeks)",
            Self::Standard => "Standard (6-8 weeks)",
            Self::Extended => "Extended (3+ months)",
            Self::Flexible => "Flexible Timeline",
        }
    }
}

/// Next (or previous) value of a choice field, starting from `current`.
///
/// An empty or unrecognised value moves to the first (or last) option.
/// Returns `None` for fields that are not choices.
pub fn cycle_choice(field: InquiryField, current: &str, forward: bool) -> Option<&'static str> {
    match field {
        InquiryField::Service => Some(step::<ServiceInterest>(current, forward)),
        InquiryField::Budget => Some(step::<BudgetRange>(current, forward)),
        InquiryField::Timeline => Some(step::<Timeline>(current, forward)),
        _ => None,
    }
}

/// Display label for a stored choice value
pub fn choice_label(field: InquiryField, value: &str) -> Option<&'static str> {
    match field {
        InquiryField::Service => ServiceInterest::from_value(value).map(ChoiceOption::label),
        InquiryField::Budget => BudgetRange::from_value(value).map(ChoiceOption::label),
        InquiryField::Timeline => Timeline::from_value(value).map(ChoiceOption::label),
        _ => None,
    }
}

fn step<C: ChoiceOption>(current: &str, forward: bool) -> &'static str {
    let all = C::ALL;
    let len = all.len();
    let next = match all.iter().position(|c| c.value() == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    all[next].value()
}

/// `local@domain`, where the domain is dot-separated labels of
/// alphanumerics and inner hyphens.
fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }

    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// What is wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    InvalidEmail,
    UnknownChoice,
}

/// One field that blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: InquiryField,
    pub problem: Problem,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.problem {
            Problem::Missing => "required",
            Problem::InvalidEmail => "not a valid email address",
            Problem::UnknownChoice => "not one of the offered options",
        };
        write!(f, "{}: {}", self.field.label(), reason)
    }
}

/// Every field that blocks submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inquiry is incomplete ({})", summarize(.0))]
pub struct ValidationErrors(pub Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn fields(&self) -> impl Iterator<Item = InquiryField> + '_ {
        self.0.iter().map(|issue| issue.field)
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::test_support::filled_record;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_all_empty() {
        let record = InquiryRecord::default();
        for field in InquiryField::ALL {
            assert_eq!(record.get(field), "");
        }
    }

    #[test]
    fn test_set_touches_only_target_field() {
        for target in InquiryField::ALL {
            let before = filled_record();
            let mut after = before.clone();
            after.set(target, "changed".to_string());

            for field in InquiryField::ALL {
                if field == target {
                    assert_eq!(after.get(field), "changed");
                } else {
                    assert_eq!(after.get(field), before.get(field), "{field} moved");
                }
            }
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(filled_record()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["phone"], "");
        assert_eq!(json.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_field_names_parse_back() {
        for field in InquiryField::ALL {
            assert_eq!(field.name().parse::<InquiryField>(), Ok(field));
        }
        assert_eq!(
            "first_name".parse::<InquiryField>(),
            Err(UnknownField("first_name".to_string()))
        );
    }

    #[test]
    fn test_required_set() {
        let required: Vec<_> = InquiryField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(
            required,
            vec![
                InquiryField::FirstName,
                InquiryField::LastName,
                InquiryField::Company,
                InquiryField::Position,
                InquiryField::Email,
                InquiryField::Service,
                InquiryField::Budget,
                InquiryField::Timeline,
                InquiryField::Objectives,
            ]
        );
    }

    #[test]
    fn test_filled_record_is_valid() {
        assert_eq!(filled_record().validate(), Ok(()));
    }

    #[test]
    fn test_empty_record_reports_every_required_field() {
        let errors = InquiryRecord::default().validate().unwrap_err();
        assert_eq!(errors.issues().len(), 9);
        assert!(errors
            .issues()
            .iter()
            .all(|issue| issue.problem == Problem::Missing));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut record = filled_record();
        record.company = "   ".to_string();
        let errors = record.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![InquiryField::Company]);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("ada@example.com"));
        assert!(is_email_shaped("ada.lovelace+gifts@mail.example.ng"));
        assert!(is_email_shaped("ada@localhost"));
        assert!(!is_email_shaped("ada"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("ada@"));
        assert!(!is_email_shaped("ada@example..com"));
        assert!(!is_email_shaped("ada@-example.com"));
        assert!(!is_email_shaped("a da@example.com"));
        assert!(!is_email_shaped("ada@ex@ample.com"));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let mut record = filled_record();
        record.email = "ada-at-example".to_string();
        let errors = record.validate().unwrap_err();
        assert_eq!(
            errors.issues(),
            &[ValidationIssue {
                field: InquiryField::Email,
                problem: Problem::InvalidEmail,
            }]
        );
    }

    #[test]
    fn test_unknown_choice_is_reported() {
        let mut record = filled_record();
        record.budget = "1B".to_string();
        let errors = record.validate().unwrap_err();
        assert_eq!(errors.issues()[0].problem, Problem::UnknownChoice);
        assert_eq!(errors.issues()[0].field, InquiryField::Budget);
    }

    #[test]
    fn test_optional_fields_are_not_checked() {
        let mut record = filled_record();
        record.phone = "not a phone".to_string();
        record.location = String::new();
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_error_message_names_fields() {
        let mut record = filled_record();
        record.first_name.clear();
        let message = record.validate().unwrap_err().to_string();
        assert_eq!(message, "inquiry is incomplete (First Name: required)");
    }

    #[test]
    fn test_cycle_choice_forward_wraps() {
        assert_eq!(cycle_choice(InquiryField::Budget, "", true), Some("15-25M"));
        assert_eq!(cycle_choice(InquiryField::Budget, "100M+", true), Some("15-25M"));
        assert_eq!(cycle_choice(InquiryField::Timeline, "urgent", true), Some("standard"));
    }

    #[test]
    fn test_cycle_choice_backward_wraps() {
        assert_eq!(cycle_choice(InquiryField::Service, "", false), Some("consultation"));
        assert_eq!(
            cycle_choice(InquiryField::Service, "bespoke-gifts", false),
            Some("consultation")
        );
    }

    #[test]
    fn test_cycle_choice_ignores_text_fields() {
        assert_eq!(cycle_choice(InquiryField::Email, "", true), None);
    }

    #[test]
    fn test_choice_label() {
        assert_eq!(choice_label(InquiryField::Budget, "50-100M"), Some("₦50-100M"));
        assert_eq!(choice_label(InquiryField::Service, "nope"), None);
        assert_eq!(choice_label(InquiryField::Company, "consultation"), None);
    }
}
