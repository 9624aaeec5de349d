use crate::domain::{DomainResult, Supplier};
use crate::view::form::{require, require_non_negative, EntityForm, FormErrors, SubmitMode};

use super::{number, text};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierForm {
    pub supp_name: String,
    pub supp_ref: String,
    pub address: String,
    pub gst_no: String,
    pub contact: String,
    pub curr_code: String,
    pub credit_limit: String,
    pub tax_included: bool,
    pub notes: String,
    pub inactive: bool,
}

impl EntityForm for SupplierForm {
    type Entity = Supplier;

    fn from_entity(supplier: &Supplier) -> Self {
        Self {
            supp_name: supplier.supp_name.clone(),
            supp_ref: supplier.supp_ref.clone(),
            address: supplier.address.clone(),
            gst_no: supplier.gst_no.clone(),
            contact: supplier.contact.clone(),
            curr_code: supplier.curr_code.clone(),
            credit_limit: supplier.credit_limit.to_string(),
            tax_included: supplier.tax_included,
            notes: supplier.notes.clone(),
            inactive: supplier.inactive,
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "supp_name", &self.supp_name, "Supplier name is required");
        require(&mut errors, "supp_ref", &self.supp_ref, "Short name is required");
        require(&mut errors, "curr_code", &self.curr_code, "Select a currency");
        require_non_negative(&mut errors, "credit_limit", &self.credit_limit);
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<Supplier> {
        Ok(Supplier {
            supplier_id: mode.editing().copied().unwrap_or(0),
            supp_name: text(&self.supp_name),
            supp_ref: text(&self.supp_ref),
            address: text(&self.address),
            gst_no: text(&self.gst_no),
            contact: text(&self.contact),
            curr_code: text(&self.curr_code),
            credit_limit: number(&self.credit_limit),
            tax_included: self.tax_included,
            notes: text(&self.notes),
            inactive: self.inactive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_required_fields() {
        let errors = SupplierForm { credit_limit: "0".into(), ..Default::default() }.validate();
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["curr_code", "supp_name", "supp_ref"]);
    }

    #[test]
    fn test_supplier_maps_back() {
        let form = SupplierForm {
            supp_name: " Parts Ltd ".into(),
            supp_ref: "PARTS".into(),
            curr_code: "GBP".into(),
            credit_limit: "100".into(),
            tax_included: true,
            ..Default::default()
        };
        let supplier = form.to_entity(&SubmitMode::Update(9)).unwrap();
        assert_eq!(supplier.supplier_id, 9);
        assert_eq!(supplier.supp_name, "Parts Ltd");
        assert!(supplier.tax_included);
        assert_eq!(SupplierForm::from_entity(&supplier).credit_limit, "100");
    }
}
