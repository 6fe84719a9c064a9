//! PQRS contact form: petitions, complaints, claims and suggestions.

use crate::outbound::mailto_link;
use serde::{Deserialize, Serialize};
use std::fmt;

const NO_NAME: &str = "(no name)";
const NO_EMAIL: &str = "(no email)";
const EMPTY_MESSAGE: &str = "(empty)";

/// Contact request category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PqrsKind {
    #[default]
    Petition,
    Complaint,
    Claim,
    Suggestion,
}

impl PqrsKind {
    pub const ALL: [PqrsKind; 4] = [
        PqrsKind::Petition,
        PqrsKind::Complaint,
        PqrsKind::Claim,
        PqrsKind::Suggestion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PqrsKind::Petition => "Petition",
            PqrsKind::Complaint => "Complaint",
            PqrsKind::Claim => "Claim",
            PqrsKind::Suggestion => "Suggestion",
        }
    }

    /// Accepts the English label, the Spanish one, or the PQRS initial.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "petition" | "petición" | "peticion" | "p" => Some(PqrsKind::Petition),
            "complaint" | "queja" | "q" => Some(PqrsKind::Complaint),
            "claim" | "reclamo" | "r" => Some(PqrsKind::Claim),
            "suggestion" | "sugerencia" | "s" => Some(PqrsKind::Suggestion),
            _ => None,
        }
    }
}

impl fmt::Display for PqrsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form fields. Blank fields are allowed and get placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub kind: PqrsKind,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(kind: PqrsKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn display_name(&self) -> &str {
        or_placeholder(&self.name, NO_NAME)
    }

    fn display_email(&self) -> &str {
        or_placeholder(&self.email, NO_EMAIL)
    }

    fn display_message(&self) -> &str {
        or_placeholder(&self.message, EMPTY_MESSAGE)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

/// The form as one structured message, ready for a messaging link.
pub fn contact_message(form: &ContactForm) -> String {
    format!(
        "PQRS request: {kind}\nName: {name}\nEmail: {email}\nMessage: {message}",
        kind = form.kind,
        name = form.display_name(),
        email = form.display_email(),
        message = form.display_message(),
    )
}

/// Subject and body for the mail fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn mailto(&self, address: &str) -> String {
        mailto_link(address, &self.subject, &self.body)
    }
}

pub fn contact_email(form: &ContactForm) -> EmailDraft {
    EmailDraft {
        subject: format!("PQRS - {} from {}", form.kind, form.display_name()),
        body: contact_message(form),
    }
}
