use crate::domain::{Customer, DomainResult, SalesPerson, SalesPos};
use crate::view::form::{
    require, require_email, require_non_negative, require_selected, EntityForm, FormErrors, SubmitMode,
};

use super::{number, text};

// ========================
// Sales Person
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesPersonForm {
    pub salesman_name: String,
    pub salesman_phone: String,
    pub salesman_fax: String,
    pub salesman_email: String,
    pub provision: String,
    pub break_pt: String,
    pub provision2: String,
    pub inactive: bool,
}

impl EntityForm for SalesPersonForm {
    type Entity = SalesPerson;

    fn from_entity(person: &SalesPerson) -> Self {
        Self {
            salesman_name: person.salesman_name.clone(),
            salesman_phone: person.salesman_phone.clone(),
            salesman_fax: person.salesman_fax.clone(),
            salesman_email: person.salesman_email.clone(),
            provision: person.provision.to_string(),
            break_pt: person.break_pt.to_string(),
            provision2: person.provision2.to_string(),
            inactive: person.inactive,
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "salesman_name", &self.salesman_name, "Name is required");
        require_email(&mut errors, "salesman_email", &self.salesman_email);
        require_non_negative(&mut errors, "provision", &self.provision);
        require_non_negative(&mut errors, "break_pt", &self.break_pt);
        require_non_negative(&mut errors, "provision2", &self.provision2);
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<SalesPerson> {
        Ok(SalesPerson {
            id: mode.editing().copied().unwrap_or(0),
            salesman_name: text(&self.salesman_name),
            salesman_phone: text(&self.salesman_phone),
            salesman_fax: text(&self.salesman_fax),
            salesman_email: text(&self.salesman_email),
            provision: number(&self.provision),
            break_pt: number(&self.break_pt),
            provision2: number(&self.provision2),
            inactive: self.inactive,
        })
    }
}

// ========================
// Point of Sale
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct SalesPosForm {
    pub pos_name: String,
    pub cash_sale: bool,
    pub credit_sale: bool,
    pub pos_location: String,
    pub pos_account: u32,
    pub inactive: bool,
}

impl Default for SalesPosForm {
    fn default() -> Self {
        Self {
            pos_name: String::new(),
            cash_sale: true,
            credit_sale: true,
            pos_location: String::new(),
            pos_account: 0,
            inactive: false,
        }
    }
}

impl EntityForm for SalesPosForm {
    type Entity = SalesPos;

    fn from_entity(pos: &SalesPos) -> Self {
        Self {
            pos_name: pos.pos_name.clone(),
            cash_sale: pos.cash_sale,
            credit_sale: pos.credit_sale,
            pos_location: pos.pos_location.clone(),
            pos_account: pos.pos_account,
            inactive: pos.inactive,
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "pos_name", &self.pos_name, "Point of sale name is required");
        require(&mut errors, "pos_location", &self.pos_location, "Select a location");
        if !self.cash_sale && !self.credit_sale {
            errors.insert("credit_sale", "Allow cash sale, credit sale or both");
        }
        if self.cash_sale {
            require_selected(&mut errors, "pos_account", self.pos_account, "Select a cash account");
        }
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<SalesPos> {
        Ok(SalesPos {
            id: mode.editing().copied().unwrap_or(0),
            pos_name: text(&self.pos_name),
            cash_sale: self.cash_sale,
            credit_sale: self.credit_sale,
            pos_location: text(&self.pos_location),
            pos_account: if self.cash_sale { self.pos_account } else { 0 },
            inactive: self.inactive,
        })
    }
}

// ========================
// Customer
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub debtor_ref: String,
    pub address: String,
    pub tax_id: String,
    pub curr_code: String,
    pub sales_type: u32,
    pub credit_limit: String,
    pub notes: String,
    pub inactive: bool,
}

impl EntityForm for CustomerForm {
    type Entity = Customer;

    fn from_entity(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            debtor_ref: customer.debtor_ref.clone(),
            address: customer.address.clone(),
            tax_id: customer.tax_id.clone(),
            curr_code: customer.curr_code.clone(),
            sales_type: customer.sales_type,
            credit_limit: customer.credit_limit.to_string(),
            notes: customer.notes.clone(),
            inactive: customer.inactive,
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "name", &self.name, "Customer name is required");
        require(&mut errors, "debtor_ref", &self.debtor_ref, "Short name is required");
        require(&mut errors, "curr_code", &self.curr_code, "Select a currency");
        require_selected(&mut errors, "sales_type", self.sales_type, "Select a sales type");
        require_non_negative(&mut errors, "credit_limit", &self.credit_limit);
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<Customer> {
        Ok(Customer {
            debtor_no: mode.editing().copied().unwrap_or(0),
            name: text(&self.name),
            debtor_ref: text(&self.debtor_ref),
            address: text(&self.address),
            tax_id: text(&self.tax_id),
            curr_code: text(&self.curr_code),
            sales_type: self.sales_type,
            credit_limit: number(&self.credit_limit),
            notes: text(&self.notes),
            inactive: self.inactive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::form::{load_for_edit, submit};
    use crate::view::testing::MemoryRepository;

    #[test]
    fn test_sales_person_numbers_and_email() {
        let form = SalesPersonForm {
            salesman_name: "Ann".into(),
            salesman_email: "ann@".into(),
            provision: "-1".into(),
            break_pt: "1,000".into(),
            provision2: "".into(),
            ..Default::default()
        };
        let errors = form.validate();
        assert!(errors.get("salesman_email").is_some());
        assert!(errors.get("provision").is_some());
        assert!(errors.get("provision2").is_some());
        assert!(errors.get("break_pt").is_none());
    }

    #[tokio::test]
    async fn test_sales_person_edit_updates_once() {
        let person = SalesPerson { id: 2, salesman_name: "Bob".into(), provision: 5.0, ..Default::default() };
        let repo = MemoryRepository::new(vec![person]);

        let mut form: SalesPersonForm = load_for_edit(&repo, &2).await.unwrap();
        assert_eq!(form.provision, "5");
        form.salesman_name = "Robert".into();
        let saved = submit(&repo, &form, &[], SubmitMode::Update(2)).await.unwrap();

        assert_eq!(saved.salesman_name, "Robert");
        assert_eq!(repo.calls().found, 1);
        assert_eq!(repo.calls().updated, 1);
        assert_eq!(repo.rows()[0].salesman_name, "Robert");
    }

    #[test]
    fn test_pos_needs_a_sale_kind() {
        let form = SalesPosForm {
            pos_name: "Counter".into(),
            pos_location: "DEF".into(),
            cash_sale: false,
            credit_sale: false,
            ..Default::default()
        };
        assert_eq!(form.validate().get("credit_sale"), Some("Allow cash sale, credit sale or both"));

        let credit_only = SalesPosForm { credit_sale: true, pos_account: 77, ..form };
        assert!(credit_only.validate().is_empty());
        assert_eq!(credit_only.to_entity(&SubmitMode::Create).unwrap().pos_account, 0);
    }

    #[test]
    fn test_customer_credit_limit() {
        let form = CustomerForm {
            name: "Acme".into(),
            debtor_ref: "ACME".into(),
            curr_code: "USD".into(),
            sales_type: 1,
            credit_limit: "-5".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().get("credit_limit"), Some("Must be a number of zero or more"));
        let form = CustomerForm { credit_limit: "2,500".into(), ..form };
        assert_eq!(form.to_entity(&SubmitMode::Create).unwrap().credit_limit, 2500.0);
    }
}
