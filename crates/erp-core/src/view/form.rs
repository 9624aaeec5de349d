//! Form Pipeline
//!
//! Local form state is validated synchronously; only a clean form reaches
//! the repository, and then with exactly one create or update call.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{DomainError, DomainResult, Entity};
use crate::repository::Repository;

/// Field name → message, in field-name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn merge(&mut self, other: FormErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{}: {}", field, msg)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

// ========================
// Field Checks
// ========================

/// Parse user-typed numbers, tolerating surrounding blanks and thousands separators
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn require(errors: &mut FormErrors, field: &'static str, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, message);
        return false;
    }
    true
}

pub fn require_max_len(errors: &mut FormErrors, field: &'static str, value: &str, max: usize) -> bool {
    if value.trim().chars().count() > max {
        errors.insert(field, format!("Must be at most {} characters", max));
        return false;
    }
    true
}

/// Selected id from a dropdown; zero means nothing chosen
pub fn require_selected(errors: &mut FormErrors, field: &'static str, value: u32, message: &str) -> bool {
    if value == 0 {
        errors.insert(field, message);
        return false;
    }
    true
}

pub fn require_number(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<f64> {
    let parsed = parse_number(raw);
    if parsed.is_none() {
        errors.insert(field, "Must be a number");
    }
    parsed
}

pub fn require_positive(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<f64> {
    match parse_number(raw) {
        Some(n) if n > 0.0 => Some(n),
        _ => {
            errors.insert(field, "Must be a number greater than zero");
            None
        }
    }
}

pub fn require_non_negative(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<f64> {
    match parse_number(raw) {
        Some(n) if n >= 0.0 => Some(n),
        _ => {
            errors.insert(field, "Must be a number of zero or more");
            None
        }
    }
}

pub fn require_date(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<NaiveDate> {
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.insert(field, "Enter a date as YYYY-MM-DD");
    }
    parsed
}

/// Optional email: blank passes, anything else must look like `local@domain.tld`
pub fn require_email(errors: &mut FormErrors, field: &'static str, raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return true;
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        errors.insert(field, "Enter a valid email address");
    }
    valid
}

// ========================
// Form Contract
// ========================

/// Local state of an add/edit screen for one entity
pub trait EntityForm: Clone {
    type Entity: Entity;

    /// Map a fetched record into editable fields
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Required-field and format checks
    fn validate(&self) -> FormErrors;

    /// Map the fields back to a wire record. Only called on a clean form.
    fn to_entity(&self, mode: &SubmitMode<<Self::Entity as Entity>::Id>) -> DomainResult<Self::Entity>;

    /// Checks against records already loaded on the page
    fn conflicts(
        &self,
        _existing: &[Self::Entity],
        _editing: Option<&<Self::Entity as Entity>::Id>,
    ) -> FormErrors {
        FormErrors::new()
    }
}

/// Whether the form creates a record or updates the one with this id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode<Id> {
    Create,
    Update(Id),
}

impl<Id> SubmitMode<Id> {
    pub fn editing(&self) -> Option<&Id> {
        match self {
            SubmitMode::Create => None,
            SubmitMode::Update(id) => Some(id),
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, SubmitMode::Update(_))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please correct the highlighted fields ({0})")]
    Invalid(FormErrors),

    #[error(transparent)]
    Backend(#[from] DomainError),
}

impl SubmitError {
    /// Text for an error modal
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => "Please correct the highlighted fields.".to_string(),
            SubmitError::Backend(err) => err.user_message(),
        }
    }
}

/// Apply one field edit and drop that field's pending error
pub fn apply_edit<F>(form: &mut F, errors: &mut FormErrors, field: &'static str, edit: impl FnOnce(&mut F)) {
    edit(form);
    errors.clear(field);
}

/// Run every check the form defines against the current state
pub fn check<F: EntityForm>(
    form: &F,
    existing: &[F::Entity],
    mode: &SubmitMode<<F::Entity as Entity>::Id>,
) -> FormErrors {
    let mut errors = form.validate();
    if errors.is_empty() {
        errors.merge(form.conflicts(existing, mode.editing()));
    }
    errors
}

/// Validate, then create or update exactly once
pub async fn submit<F, R>(
    repo: &R,
    form: &F,
    existing: &[F::Entity],
    mode: SubmitMode<<F::Entity as Entity>::Id>,
) -> Result<F::Entity, SubmitError>
where
    F: EntityForm,
    R: Repository<F::Entity> + ?Sized,
{
    let errors = check(form, existing, &mode);
    if !errors.is_empty() {
        log::debug!("[FORM] submit blocked: {}", errors);
        return Err(SubmitError::Invalid(errors));
    }
    let entity = form.to_entity(&mode)?;
    let saved = match &mode {
        SubmitMode::Create => repo.create(&entity).await,
        SubmitMode::Update(_) => repo.update(&entity).await,
    };
    saved.map_err(|err| {
        log::warn!("[FORM] save failed: {}", err);
        SubmitError::Backend(err)
    })
}

/// Fetch a record for an update form and map it into form fields
pub async fn load_for_edit<F, R>(repo: &R, id: &<F::Entity as Entity>::Id) -> DomainResult<F>
where
    F: EntityForm,
    R: Repository<F::Entity> + ?Sized,
{
    let entity = repo.find_by_id(id).await?;
    Ok(F::from_entity(&entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1,250.5 "), Some(1250.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_positive_rejects_zero_and_text() {
        let mut errors = FormErrors::new();
        assert_eq!(require_positive(&mut errors, "quantity", "0"), None);
        assert!(errors.get("quantity").is_some());

        let mut errors = FormErrors::new();
        assert_eq!(require_positive(&mut errors, "quantity", "two"), None);
        assert_eq!(errors.len(), 1);

        let mut errors = FormErrors::new();
        assert_eq!(require_positive(&mut errors, "quantity", "2"), Some(2.0));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_check() {
        let mut errors = FormErrors::new();
        assert!(require_email(&mut errors, "email", ""));
        assert!(require_email(&mut errors, "email", "a@b.co"));
        assert!(!require_email(&mut errors, "email", "a@b"));
        assert!(!require_email(&mut errors, "email", "a b@c.de"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_first_error_wins_and_clear() {
        let mut errors = FormErrors::new();
        errors.insert("name", "Required");
        errors.insert("name", "Too long");
        assert_eq!(errors.get("name"), Some("Required"));
        errors.clear("name");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_date_format() {
        let mut errors = FormErrors::new();
        assert!(require_date(&mut errors, "date", "2024-02-29").is_some());
        assert!(require_date(&mut errors, "date", "29/02/2024").is_none());
        assert_eq!(errors.get("date"), Some("Enter a date as YYYY-MM-DD"));
    }
}
