use serde::Serialize;

use crate::config::{DEMO_REQUEST_SUBJECT, DEMO_REQUEST_TEMPLATE};

/// One of the demo-request inputs, keyed by the input's `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Organization,
    Message,
}

impl Field {
    pub fn from_input_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "organization" => Some(Field::Organization),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Organization => "organization",
            Field::Message => "message",
        }
    }
}

/// Current contents of the demo-request form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl DemoRequest {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Organization => &mut self.organization,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = DemoRequest::default();
    }

    pub fn payload(&self) -> DemoRequestPayload {
        DemoRequestPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            organization: self.organization.clone(),
            message: self.message.clone(),
            subject: DEMO_REQUEST_SUBJECT,
            template: DEMO_REQUEST_TEMPLATE,
        }
    }
}

/// JSON body accepted by the form relay. The underscore-prefixed keys are
/// relay directives rather than form data.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DemoRequestPayload {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: &'static str,
    #[serde(rename = "_template")]
    pub template: &'static str,
}
