use crate::domain::{Bom, DomainResult};
use crate::view::form::{require, require_positive, require_selected, EntityForm, FormErrors, SubmitMode};

use super::{number, text};

pub const DUPLICATE_BOM_LINE: &str =
    "This component already exists in the bill of material for this location and work centre.";

/// One component line; the parent is fixed by the screen the form opens from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomForm {
    pub parent: u32,
    pub component: u32,
    pub work_centre: u32,
    pub loc_code: String,
    pub quantity: String,
}

impl BomForm {
    /// Empty line for `parent`, quantity prefilled to one
    pub fn for_parent(parent: u32) -> Self {
        Self { parent, quantity: "1".to_string(), ..Default::default() }
    }
}

impl EntityForm for BomForm {
    type Entity = Bom;

    fn from_entity(bom: &Bom) -> Self {
        Self {
            parent: bom.parent,
            component: bom.component,
            work_centre: bom.work_centre,
            loc_code: bom.loc_code.clone(),
            quantity: bom.quantity.to_string(),
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require_selected(&mut errors, "parent", self.parent, "Select a parent item");
        if require_selected(&mut errors, "component", self.component, "Select a component")
            && self.component == self.parent
        {
            errors.insert("component", "An item cannot be a component of itself");
        }
        require_selected(&mut errors, "work_centre", self.work_centre, "Select a work centre");
        require(&mut errors, "loc_code", &self.loc_code, "Select a location");
        require_positive(&mut errors, "quantity", &self.quantity);
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<Bom> {
        Ok(Bom {
            id: mode.editing().copied().unwrap_or(0),
            parent: self.parent,
            component: self.component,
            work_centre: self.work_centre,
            loc_code: text(&self.loc_code),
            quantity: number(&self.quantity),
        })
    }

    fn conflicts(&self, existing: &[Bom], editing: Option<&u32>) -> FormErrors {
        let mut errors = FormErrors::new();
        let candidate = Bom {
            parent: self.parent,
            component: self.component,
            work_centre: self.work_centre,
            loc_code: text(&self.loc_code),
            ..Default::default()
        };
        if existing.iter().any(|line| Some(&line.id) != editing && line.same_line_as(&candidate)) {
            errors.insert("component", DUPLICATE_BOM_LINE);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::form::{submit, SubmitError};
    use crate::view::testing::MemoryRepository;

    fn existing() -> Vec<Bom> {
        vec![Bom { id: 7, parent: 10, component: 20, work_centre: 1, loc_code: "A".into(), quantity: 2.0 }]
    }

    fn line() -> BomForm {
        BomForm { parent: 10, component: 20, work_centre: 1, loc_code: "A".into(), quantity: "3".into() }
    }

    #[tokio::test]
    async fn test_duplicate_line_rejected_without_backend_call() {
        let repo = MemoryRepository::new(existing());

        let result = submit(&repo, &line(), &existing(), SubmitMode::Create).await;

        match result {
            Err(SubmitError::Invalid(errors)) => assert_eq!(errors.get("component"), Some(DUPLICATE_BOM_LINE)),
            other => panic!("expected duplicate rejection, got {:?}", other),
        }
        assert_eq!(repo.calls().created, 0);
        assert_eq!(repo.calls().updated, 0);
    }

    #[tokio::test]
    async fn test_editing_the_same_line_is_not_a_duplicate() {
        let repo = MemoryRepository::new(existing());
        let saved = submit(&repo, &line(), &existing(), SubmitMode::Update(7)).await.unwrap();
        assert_eq!(saved.quantity, 3.0);
        assert_eq!(repo.calls().updated, 1);
    }

    #[tokio::test]
    async fn test_other_location_is_a_new_line() {
        let repo = MemoryRepository::new(existing());
        let form = BomForm { loc_code: "B".into(), ..line() };
        submit(&repo, &form, &existing(), SubmitMode::Create).await.unwrap();
        assert_eq!(repo.calls().created, 1);
        assert_eq!(repo.rows().len(), 2);
    }

    #[test]
    fn test_quantity_and_self_reference() {
        let form = BomForm { component: 10, quantity: "0".into(), ..line() };
        let errors = form.validate();
        assert_eq!(errors.get("component"), Some("An item cannot be a component of itself"));
        assert_eq!(errors.get("quantity"), Some("Must be a number greater than zero"));
    }

    #[test]
    fn test_for_parent_defaults() {
        let form = BomForm::for_parent(10);
        let errors = form.validate();
        assert!(errors.get("parent").is_none());
        assert!(errors.get("quantity").is_none());
        assert!(errors.get("component").is_some());
    }
}
