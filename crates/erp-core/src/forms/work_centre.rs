use crate::domain::{DomainResult, WorkCentre};
use crate::view::form::{require, EntityForm, FormErrors, SubmitMode};

use super::text;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkCentreForm {
    pub name: String,
    pub description: String,
    pub inactive: bool,
}

impl EntityForm for WorkCentreForm {
    type Entity = WorkCentre;

    fn from_entity(centre: &WorkCentre) -> Self {
        Self { name: centre.name.clone(), description: centre.description.clone(), inactive: centre.inactive }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<WorkCentre> {
        Ok(WorkCentre {
            id: mode.editing().copied().unwrap_or(0),
            name: text(&self.name),
            description: text(&self.description),
            inactive: self.inactive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert_eq!(WorkCentreForm::default().validate().get("name"), Some("Name is required"));
        let form = WorkCentreForm { name: " Paint shop ".into(), ..Default::default() };
        assert_eq!(form.to_entity(&SubmitMode::Create).unwrap().name, "Paint shop");
    }
}
