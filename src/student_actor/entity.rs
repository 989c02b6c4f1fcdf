//! [`ActorEntity`] implementation for [`Student`].
//!
//! Students have no actions and no updates; the store only validates registrations.

use super::StudentError;
use crate::model::{Student, StudentCreate, StudentId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Student {
    type Id = StudentId;
    type Create = StudentCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = StudentError;

    fn from_create_params(id: StudentId, params: StudentCreate) -> Result<Self, StudentError> {
        let first_name = params.first_name.trim();
        if first_name.is_empty() {
            return Err(StudentError::MissingFirstName);
        }
        let contact_number = params.contact_number.trim();
        if contact_number.is_empty() {
            return Err(StudentError::MissingContactNumber);
        }
        let last_name = params
            .last_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            id,
            first_name: first_name.to_string(),
            last_name,
            contact_number: contact_number.to_string(),
        })
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), StudentError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), StudentError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_trims_and_drops_blank_last_name() {
        let params = StudentCreate::new("  Ada ", " 555-0101").with_last_name("   ");
        let student = Student::from_create_params(StudentId(1), params).unwrap();

        assert_eq!(student.first_name, "Ada");
        assert_eq!(student.contact_number, "555-0101");
        assert_eq!(student.last_name, None);
        assert_eq!(student.full_name(), "Ada");
    }

    #[test]
    fn test_registration_requires_first_name_and_contact() {
        assert_eq!(
            Student::from_create_params(StudentId(1), StudentCreate::new(" ", "555")),
            Err(StudentError::MissingFirstName)
        );
        assert_eq!(
            Student::from_create_params(StudentId(1), StudentCreate::new("Ada", "")),
            Err(StudentError::MissingContactNumber)
        );
    }
}
