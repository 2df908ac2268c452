//! Validation for the site's contact form.
//!
//! Errors accumulate in field order so the page can list every problem in a
//! single message, the way the form has always reported them.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::LazyLock;

pub const SUCCESS_MESSAGE: &str =
    "Mesajınız başarıyla gönderildi! En kısa sürede size dönüş yapacağız.";

const ERROR_HEADER: &str = "Lütfen aşağıdaki hataları düzeltiniz:";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Raw field values as submitted by the form.
pub struct ContactSubmission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// A checked box arrives as its `value` (`"on"` unless set); an
    /// unchecked one is absent.
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub consent: bool,
}

fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Flag(bool),
        Value(String),
    }

    Ok(match Checkbox::deserialize(deserializer)? {
        Checkbox::Flag(checked) => checked,
        Checkbox::Value(value) => !matches!(value.trim(), "" | "off" | "false"),
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
    FirstNameMissing,
    LastNameMissing,
    EmailMissing,
    EmailInvalid,
    SubjectMissing,
    MessageMissing,
    ConsentMissing,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::FirstNameMissing => "Ad alanı zorunludur.",
            FieldError::LastNameMissing => "Soyad alanı zorunludur.",
            FieldError::EmailMissing => "E-posta alanı zorunludur.",
            FieldError::EmailInvalid => "Geçerli bir e-posta adresi giriniz.",
            FieldError::SubjectMissing => "Konu seçimi zorunludur.",
            FieldError::MessageMissing => "Mesaj alanı zorunludur.",
            FieldError::ConsentMissing => "Kişisel veri işleme onayı zorunludur.",
        }
    }
}

/// Every problem found in one submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormErrors(pub Vec<FieldError>);

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ERROR_HEADER)?;
        for error in &self.0 {
            write!(f, "\n{}", error.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

pub fn validate_submission(submission: &ContactSubmission) -> Result<(), FormErrors> {
    let mut errors = Vec::new();

    if submission.first_name.trim().is_empty() {
        errors.push(FieldError::FirstNameMissing);
    }
    if submission.last_name.trim().is_empty() {
        errors.push(FieldError::LastNameMissing);
    }
    if submission.email.trim().is_empty() {
        errors.push(FieldError::EmailMissing);
    } else if !is_valid_email(&submission.email) {
        errors.push(FieldError::EmailInvalid);
    }
    // The subject is a select; only the empty placeholder counts as missing.
    if submission.subject.is_empty() {
        errors.push(FieldError::SubjectMissing);
    }
    if submission.message.trim().is_empty() {
        errors.push(FieldError::MessageMissing);
    }
    if !submission.consent {
        errors.push(FieldError::ConsentMissing);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "contact form rejected");
        Err(FormErrors(errors))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
