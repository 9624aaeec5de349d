use crate::domain::{DomainResult, InventoryLocation};
use crate::view::form::{require, require_email, require_max_len, EntityForm, FormErrors, SubmitMode};

use super::text;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationForm {
    pub loc_code: String,
    pub location_name: String,
    pub delivery_address: String,
    pub phone: String,
    pub phone2: String,
    pub fax: String,
    pub email: String,
    pub contact: String,
    pub fixed_asset: bool,
    pub inactive: bool,
}

impl EntityForm for LocationForm {
    type Entity = InventoryLocation;

    fn from_entity(location: &InventoryLocation) -> Self {
        Self {
            loc_code: location.loc_code.clone(),
            location_name: location.location_name.clone(),
            delivery_address: location.delivery_address.clone(),
            phone: location.phone.clone(),
            phone2: location.phone2.clone(),
            fax: location.fax.clone(),
            email: location.email.clone(),
            contact: location.contact.clone(),
            fixed_asset: location.fixed_asset,
            inactive: location.inactive,
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if require(&mut errors, "loc_code", &self.loc_code, "Location code is required") {
            require_max_len(&mut errors, "loc_code", &self.loc_code, 5);
        }
        require(&mut errors, "location_name", &self.location_name, "Location name is required");
        require_email(&mut errors, "email", &self.email);
        errors
    }

    /// The code is the key; an update keeps the code it was opened with
    fn to_entity(&self, mode: &SubmitMode<String>) -> DomainResult<InventoryLocation> {
        let loc_code = match mode.editing() {
            Some(code) => code.clone(),
            None => text(&self.loc_code).to_uppercase(),
        };
        Ok(InventoryLocation {
            loc_code,
            location_name: text(&self.location_name),
            delivery_address: text(&self.delivery_address),
            phone: text(&self.phone),
            phone2: text(&self.phone2),
            fax: text(&self.fax),
            email: text(&self.email),
            contact: text(&self.contact),
            fixed_asset: self.fixed_asset,
            inactive: self.inactive,
        })
    }

    fn conflicts(&self, existing: &[InventoryLocation], editing: Option<&String>) -> FormErrors {
        let mut errors = FormErrors::new();
        if editing.is_none() {
            let code = text(&self.loc_code);
            if existing.iter().any(|l| l.loc_code.eq_ignore_ascii_case(&code)) {
                errors.insert("loc_code", "This location code is already in use");
            }
        }
        errors
    }
}
