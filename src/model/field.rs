use std::fmt;

use serde::Serialize;

/// One of the five inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    LastName,
    FirstName,
    Category,
    Email,
    Message,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text on one line.
    SingleLine,
    /// Free text that may contain newlines.
    MultiLine,
    /// A choice from the configured category list.
    Category,
}

static ALL_FIELDS: &[FieldName] = &[
    FieldName::LastName,
    FieldName::FirstName,
    FieldName::Category,
    FieldName::Email,
    FieldName::Message,
];

impl FieldName {
    /// Returns all fields in display order.
    pub fn all() -> &'static [FieldName] {
        ALL_FIELDS
    }

    /// Returns the editing kind for this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Category => FieldKind::Category,
            FieldName::Message => FieldKind::MultiLine,
            FieldName::LastName | FieldName::FirstName | FieldName::Email => FieldKind::SingleLine,
        }
    }

    /// Returns the label shown above the editor.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::LastName => "Last name",
            FieldName::FirstName => "First name",
            FieldName::Category => "Personal / Business",
            FieldName::Email => "Email",
            FieldName::Message => "Message",
        }
    }

    /// Returns the placeholder shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Message => "message",
            _ => "",
        }
    }

    /// Returns the inline message shown while the field is invalid.
    pub fn error_message(&self) -> &'static str {
        match self {
            FieldName::LastName => "Last name is required",
            FieldName::FirstName => "First name is required",
            FieldName::Category => "Please select a category",
            FieldName::Email => "Email is required",
            FieldName::Message => "Message is required",
        }
    }
}

#[mutants::skip]
impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldName::LastName => "lastName",
            FieldName::FirstName => "firstName",
            FieldName::Category => "category",
            FieldName::Email => "email",
            FieldName::Message => "message",
        })
    }
}
