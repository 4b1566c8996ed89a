//! Per-step form state: draft values, inline errors, derived validity.

use std::collections::BTreeMap;

use crate::application::{ApplicationRecord, ApplicationUpdate, DocumentUpdate};
use crate::steps::OnboardingStep;
use crate::validation::{self, Field};

/// The fields a data-entry step owns. The Documents step is not field-based,
/// see [`DocumentsDraft`].
pub fn step_fields(step: OnboardingStep) -> &'static [Field] {
    match step {
        OnboardingStep::PersonalData => &[Field::FullName, Field::Cnp, Field::Email],
        OnboardingStep::Address => &[Field::Address, Field::City, Field::County, Field::Phone],
        OnboardingStep::WorkData => &[
            Field::Company,
            Field::Position,
            Field::Income,
            Field::Experience,
        ],
        OnboardingStep::Documents | OnboardingStep::Summary => &[],
    }
}

fn record_value(record: &ApplicationRecord, field: Field) -> &str {
    match field {
        Field::FullName => &record.full_name,
        Field::Cnp => &record.cnp,
        Field::Email => &record.email,
        Field::Address => &record.address,
        Field::City => &record.city,
        Field::County => &record.county,
        Field::Phone => &record.phone,
        Field::Company => &record.company,
        Field::Position => &record.position,
        Field::Income => &record.income,
        Field::Experience => &record.experience,
    }
}

fn update_value(update: &mut ApplicationUpdate, field: Field, value: String) {
    let slot = match field {
        Field::FullName => &mut update.full_name,
        Field::Cnp => &mut update.cnp,
        Field::Email => &mut update.email,
        Field::Address => &mut update.address,
        Field::City => &mut update.city,
        Field::County => &mut update.county,
        Field::Phone => &mut update.phone,
        Field::Company => &mut update.company,
        Field::Position => &mut update.position,
        Field::Income => &mut update.income,
        Field::Experience => &mut update.experience,
    };
    *slot = Some(value);
}

/// Draft state for one data-entry step. Edits land here, never directly in
/// the aggregate; only a valid submit produces an update.
#[derive(Debug, Clone)]
pub struct StepForm {
    fields: &'static [Field],
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, String>,
    valid: bool,
}

impl StepForm {
    /// Seed drafts from the aggregate's current values, so revisiting a step
    /// shows what was entered before.
    pub fn new(step: OnboardingStep, record: &ApplicationRecord) -> Self {
        let fields = step_fields(step);
        let values = fields
            .iter()
            .map(|f| (*f, record_value(record, *f).to_string()))
            .collect();
        let mut form = Self {
            fields,
            values,
            errors: BTreeMap::new(),
            valid: false,
        };
        form.recompute_validity();
        form
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Store an edited draft value, revalidate that field, and refresh the
    /// derived validity. Runs on every keystroke, not lazily at submit.
    pub fn set_field(&mut self, field: Field, value: String) {
        match validation::validate(field, &value) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.values.insert(field, value);
        self.recompute_validity();
    }

    // Validity is a pure function of (drafts, errors): no field may carry an
    // error and no trimmed draft may be blank.
    fn recompute_validity(&mut self) {
        self.valid = self.errors.is_empty()
            && self
                .fields
                .iter()
                .all(|f| !self.value(*f).trim().is_empty());
    }

    /// Produce the step's partial update, trimmed, carrying only the fields
    /// this step owns. `None` while the form is invalid.
    pub fn submit(&self) -> Option<ApplicationUpdate> {
        if !self.valid {
            return None;
        }
        let mut update = ApplicationUpdate::default();
        for field in self.fields {
            update_value(&mut update, *field, self.value(*field).trim().to_string());
        }
        Some(update)
    }
}

/// Draft state for the document-upload step. Tracks the two required slots
/// and the optional extra attachments.
#[derive(Debug, Clone, Default)]
pub struct DocumentsDraft {
    pub id_card: Option<String>,
    pub income_proof: Option<String>,
    pub other_docs: Vec<String>,
}

impl DocumentsDraft {
    pub fn new(record: &ApplicationRecord) -> Self {
        Self {
            id_card: record.documents.id_card.clone(),
            income_proof: record.documents.income_proof.clone(),
            other_docs: record.documents.other_docs.clone(),
        }
    }

    /// Both required attachments present.
    pub fn is_complete(&self) -> bool {
        self.id_card.is_some() && self.income_proof.is_some()
    }

    /// The documents step owns the whole sub-record, so it submits all three
    /// slots; absent-key ambiguity never arises here.
    pub fn submit(&self) -> Option<ApplicationUpdate> {
        if !self.is_complete() {
            return None;
        }
        Some(ApplicationUpdate {
            documents: Some(DocumentUpdate {
                id_card: self.id_card.clone(),
                income_proof: self.income_proof.clone(),
                other_docs: Some(self.other_docs.clone()),
            }),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_personal_form_is_invalid() {
        let form = StepForm::new(OnboardingStep::PersonalData, &ApplicationRecord::default());
        assert!(!form.is_valid());
        assert!(form.submit().is_none());
    }

    #[test]
    fn validity_tracks_every_edit() {
        let mut form = StepForm::new(OnboardingStep::PersonalData, &ApplicationRecord::default());

        form.set_field(Field::FullName, "Popescu Andrei".to_string());
        form.set_field(Field::Cnp, "5010101223344".to_string());
        assert!(!form.is_valid()); // email still blank

        form.set_field(Field::Email, "a@b.com".to_string());
        assert!(form.is_valid());

        form.set_field(Field::Cnp, "123".to_string());
        assert!(!form.is_valid());
        assert!(form.error(Field::Cnp).is_some());

        form.set_field(Field::Cnp, "5010101223344".to_string());
        assert!(form.is_valid());
        assert!(form.error(Field::Cnp).is_none());
    }

    #[test]
    fn submit_trims_and_carries_only_owned_fields() {
        let mut form = StepForm::new(OnboardingStep::PersonalData, &ApplicationRecord::default());
        form.set_field(Field::FullName, "  Popescu Andrei ".to_string());
        form.set_field(Field::Cnp, "5010101223344".to_string());
        form.set_field(Field::Email, "a@b.com".to_string());

        let update = form.submit().unwrap();
        assert_eq!(update.full_name.as_deref(), Some("Popescu Andrei"));
        assert_eq!(update.cnp.as_deref(), Some("5010101223344"));
        assert!(update.address.is_none());
        assert!(update.documents.is_none());
    }

    #[test]
    fn seeded_form_starts_valid_when_aggregate_is_filled() {
        let record = ApplicationRecord {
            full_name: "Popescu Andrei".to_string(),
            cnp: "5010101223344".to_string(),
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        let form = StepForm::new(OnboardingStep::PersonalData, &record);
        assert!(form.is_valid());
        assert_eq!(form.value(Field::FullName), "Popescu Andrei");
    }

    #[test]
    fn documents_draft_requires_both_slots() {
        let mut draft = DocumentsDraft::default();
        assert!(!draft.is_complete());

        draft.id_card = Some("id-front.jpg".to_string());
        assert!(!draft.is_complete());

        draft.income_proof = Some("payslip.pdf".to_string());
        assert!(draft.is_complete());

        let update = draft.submit().unwrap();
        let docs = update.documents.unwrap();
        assert_eq!(docs.id_card.as_deref(), Some("id-front.jpg"));
        assert_eq!(docs.other_docs, Some(Vec::new()));
    }
}
