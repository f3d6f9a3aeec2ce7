use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingFields(Vec<ContactField>),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields(_) => write!(f, "Please fill in all fields."),
        }
    }
}

impl std::error::Error for ContactError {}

/// Receives validated submissions; transport is up to the implementor.
pub trait ContactSink {
    fn deliver(&mut self, submission: ContactSubmission);
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .iter()
            .copied()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

pub fn submit<S>(form: &ContactForm, sink: &mut S) -> Result<(), ContactError>
where
    S: ContactSink + ?Sized,
{
    let submission = form.validate()?;
    sink.deliver(submission);
    Ok(())
}
