use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One submitted job application, exactly as it is persisted.
///
/// Field names match the stored JSON document, so collections written by
/// earlier versions of the form load unchanged. Fields missing from a stored
/// entry default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    pub id: String,
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub experience: String,
    pub portfolio: String,
    pub instagram: String,
    pub why: String,
    pub availability: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
}

/// Where the card's contact link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLink {
    Portfolio { url: String },
    Instagram { profile_url: String, handle: String },
}

impl ApplicationRecord {
    /// Decodes one stored entry. Scalar fields that are not strings (`null`,
    /// numbers, booleans) are read as text so hand-edited or older documents
    /// still load.
    pub fn from_stored(mut entry: Value) -> serde_json::Result<Self> {
        if let Value::Object(fields) = &mut entry {
            for field in fields.values_mut() {
                match field {
                    Value::Null => *field = Value::String(String::new()),
                    Value::Bool(_) | Value::Number(_) => *field = Value::String(field.to_string()),
                    _ => {}
                }
            }
        }
        serde_json::from_value(entry)
    }

    /// Portfolio URL if present, otherwise a link to the Instagram profile.
    pub fn contact_link(&self) -> Option<ContactLink> {
        if !self.portfolio.is_empty() {
            return Some(ContactLink::Portfolio {
                url: self.portfolio.clone(),
            });
        }
        if self.instagram.is_empty() {
            return None;
        }
        let bare = self
            .instagram
            .strip_prefix('@')
            .unwrap_or(&self.instagram);
        Some(ContactLink::Instagram {
            profile_url: format!("https://instagram.com/{}", urlencoding::encode(bare)),
            handle: if self.instagram.starts_with('@') {
                self.instagram.clone()
            } else {
                format!("@{}", self.instagram)
            },
        })
    }

    /// Plain-text summary placed on the clipboard by the card's copy action.
    ///
    /// The `Portfolio` line falls back to the raw Instagram value, without the
    /// `@` normalisation the card link applies.
    pub fn copy_summary(&self) -> String {
        let contact = if self.portfolio.is_empty() {
            &self.instagram
        } else {
            &self.portfolio
        };
        format!(
            "Name: {}\nEmail: {}\nRole: {}\nPortfolio: {}\nWhy: {}",
            self.name, self.email, self.role, contact, self.why
        )
    }

    /// Case-insensitive substring match over name, email, role and why.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        format!("{} {} {} {}", self.name, self.email, self.role, self.why)
            .to_lowercase()
            .contains(needle)
    }
}

/// Raw values posted by the intake form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: String,
    pub experience: String,
    pub portfolio: String,
    pub instagram: String,
    pub why: String,
    pub availability: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
}

impl ApplicationForm {
    /// Trims surrounding whitespace from the free-text fields. Select-backed
    /// fields are kept as submitted.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            portfolio: self.portfolio.trim().to_string(),
            instagram: self.instagram.trim().to_string(),
            why: self.why.trim().to_string(),
            ..self
        }
    }

    /// The Instagram field is mandatory exactly when no portfolio is given.
    pub fn instagram_required(&self) -> bool {
        self.portfolio.trim().is_empty()
    }

    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> ApplicationRecord {
        ApplicationRecord {
            id,
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            role: self.role,
            experience: self.experience,
            portfolio: self.portfolio,
            instagram: self.instagram,
            why: self.why,
            availability: self.availability,
            start_date: self.start_date,
        }
    }
}

/// Hands out millisecond-epoch record ids that never repeat within a process,
/// even when two submissions land in the same millisecond.
#[derive(Debug, Default)]
pub struct RecordIdGenerator {
    last: AtomicI64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(millis.max(last + 1))
            })
            .unwrap_or(millis);
        millis.max(previous + 1).to_string()
    }
}
