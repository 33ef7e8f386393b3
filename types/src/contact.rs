use serde::Serialize;

/// One of the three required contact-form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// A required field was empty at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{} is required", .0.label())]
pub struct MissingField(pub ContactField);

/// The name/email/message triple submitted through the contact form.
///
/// Constructed fresh per submission attempt via [`ContactPayload::new`],
/// which enforces the required-field rule, and discarded once the request
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// Build a payload from raw form input.
    ///
    /// Values are trimmed; the first empty field, in form order, is reported
    /// as [`MissingField`].
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, MissingField> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        for (field, value) in [
            (ContactField::Name, name),
            (ContactField::Email, email),
            (ContactField::Message, message),
        ] {
            if value.is_empty() {
                return Err(MissingField(field));
            }
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Contact submission status machine.
///
/// `Idle` is initial; `Sent` and `Failed` are terminal per attempt. A new
/// submission restarts the cycle from `Sending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    #[must_use]
    pub const fn in_flight(self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}
