//! The application aggregate and its partial-update merge rules.

use serde::{Deserialize, Serialize};

/// Documents attached to an application. The two named slots are required for
/// submission; `other_docs` is an optional, ordered list of extra attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub id_card: Option<String>,
    pub income_proof: Option<String>,
    pub other_docs: Vec<String>,
}

/// The accumulated credit application. Owned by the session for the lifetime
/// of one wizard run; steps never write to it directly, only through
/// [`ApplicationRecord::merge`].
///
/// `income` and `experience` keep the applicant's raw numeric text. They are
/// validated as numbers but stored as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub full_name: String,
    pub cnp: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub income: String,
    pub experience: String,
    pub documents: DocumentSet,
}

/// Partial update to the documents sub-record. Each slot merges independently:
/// `None` always means "unchanged", never "cleared".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentUpdate {
    pub id_card: Option<String>,
    pub income_proof: Option<String>,
    pub other_docs: Option<Vec<String>>,
}

/// Partial update carrying only the fields a step owns. Absent (`None`) fields
/// keep their previous aggregate value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationUpdate {
    pub full_name: Option<String>,
    pub cnp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub income: Option<String>,
    pub experience: Option<String>,
    pub documents: Option<DocumentUpdate>,
}

fn apply(slot: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl ApplicationRecord {
    /// Merge a step's partial update into the aggregate. No step may erase
    /// data collected by a different step: only `Some` fields are written,
    /// and the nested document slots merge one by one.
    pub fn merge(&mut self, update: ApplicationUpdate) {
        apply(&mut self.full_name, update.full_name);
        apply(&mut self.cnp, update.cnp);
        apply(&mut self.email, update.email);
        apply(&mut self.address, update.address);
        apply(&mut self.city, update.city);
        apply(&mut self.county, update.county);
        apply(&mut self.phone, update.phone);
        apply(&mut self.company, update.company);
        apply(&mut self.position, update.position);
        apply(&mut self.income, update.income);
        apply(&mut self.experience, update.experience);

        if let Some(docs) = update.documents {
            if let Some(id_card) = docs.id_card {
                self.documents.id_card = Some(id_card);
            }
            if let Some(income_proof) = docs.income_proof {
                self.documents.income_proof = Some(income_proof);
            }
            if let Some(other_docs) = docs.other_docs {
                self.documents.other_docs = other_docs;
            }
        }
    }
}
