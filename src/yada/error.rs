use thiserror::Error;

#[derive(Error, Debug)]
pub enum YadaError {
    #[error("Phone number must be 10 digits long (optionally prefixed with +38): {0}")]
    InvalidPhone(String),

    #[error("Birthday date must be in the format DD.MM.YYYY: {0}")]
    InvalidBirthday(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid tag: {0:?}")]
    InvalidTag(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Email {email} not found for {name}")]
    EmailNotFound { name: String, email: String },

    #[error("No birthday recorded for {0}")]
    BirthdayNotFound(String),

    #[error("Note with id {0} not found")]
    NoteNotFound(u32),

    #[error("{0} already has a birthday; use --force to overwrite")]
    BirthdayConflict(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

/// Broad classification of a [`YadaError`], used by callers that only care
/// about how to react (report a hint, report "not found", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    NotFound,
    Conflict,
    Storage,
    Usage,
}

impl YadaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            YadaError::InvalidPhone(_)
            | YadaError::InvalidBirthday(_)
            | YadaError::InvalidEmail(_)
            | YadaError::InvalidTag(_) => ErrorKind::Format,
            YadaError::ContactNotFound(_)
            | YadaError::PhoneNotFound { .. }
            | YadaError::EmailNotFound { .. }
            | YadaError::BirthdayNotFound(_)
            | YadaError::NoteNotFound(_) => ErrorKind::NotFound,
            YadaError::BirthdayConflict(_) => ErrorKind::Conflict,
            YadaError::Io(_) | YadaError::Serialization(_) | YadaError::Store(_) => {
                ErrorKind::Storage
            }
            YadaError::Api(_) => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, YadaError>;
