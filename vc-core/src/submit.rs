//! Final submission gate and application-id synthesis.
//!
//! The gate is the single source of truth for "is this application complete".
//! It re-validates every required field even though each step already passed
//! its local checks, because the applicant can navigate backward and mutate
//! earlier steps after later ones were marked valid.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use vc_error::{SubmitError, SubmitResult};

use crate::application::ApplicationRecord;

/// Handoff payload for the success screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub application_id: String,
    pub full_name: String,
}

fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// `"VC-"` + submission time in milliseconds since epoch. One id per session;
/// uniqueness across machines is a backend concern and out of scope here.
pub fn new_application_id() -> String {
    format!("VC-{}", now_unix_ms())
}

fn required_scalars(record: &ApplicationRecord) -> [&str; 11] {
    [
        &record.full_name,
        &record.cnp,
        &record.email,
        &record.address,
        &record.city,
        &record.county,
        &record.phone,
        &record.company,
        &record.position,
        &record.income,
        &record.experience,
    ]
}

/// Run the cross-step completeness checks, in order: the required-field sweep
/// first, the phone-prefix rule only once that passes.
pub fn check(record: &ApplicationRecord) -> SubmitResult<()> {
    let scalars_ok = required_scalars(record)
        .iter()
        .all(|v| !v.trim().is_empty());
    let documents_ok =
        record.documents.id_card.is_some() && record.documents.income_proof.is_some();
    if !scalars_ok || !documents_ok {
        return Err(SubmitError::MissingRequiredFields);
    }

    if !record.phone.starts_with('+') {
        return Err(SubmitError::MissingPhonePrefix);
    }

    Ok(())
}

/// Validate and finalize: on success, synthesize the application id and
/// produce the `{application_id, full_name}` handoff. The wizard session ends
/// here.
pub fn finalize(record: &ApplicationRecord) -> SubmitResult<Submission> {
    check(record)?;

    let submission = Submission {
        application_id: new_application_id(),
        full_name: record.full_name.clone(),
    };
    match serde_json::to_string(&submission) {
        Ok(json) => log::info!("application submitted: {}", json),
        Err(e) => log::warn!("application submitted; payload not serializable: {}", e),
    }
    Ok(submission)
}
