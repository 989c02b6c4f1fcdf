use super::StudentId;
use serde::{Deserialize, Serialize};

/// A registered student.
///
/// The allocation engine only needs to know that a student exists; the remaining fields
/// are carried for listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub contact_number: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// Payload for registering a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreate {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub contact_number: String,
}

impl StudentCreate {
    pub fn new(first_name: impl Into<String>, contact_number: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: None,
            contact_number: contact_number.into(),
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}
