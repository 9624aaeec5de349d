//! Sales Entities
//!
//! Sales persons, points of sale, sales types, customers and sales orders.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{flag, is_unassigned, number, Deactivatable, Entity, Listable};

/// A salesman earning provision on sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalesPerson {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub salesman_name: String,
    #[serde(default)]
    pub salesman_phone: String,
    #[serde(default)]
    pub salesman_fax: String,
    #[serde(default)]
    pub salesman_email: String,
    /// Provision percentage below the break point
    #[serde(with = "number", default)]
    pub provision: f64,
    /// Turnover above which the second provision applies
    #[serde(with = "number", default)]
    pub break_pt: f64,
    #[serde(with = "number", default)]
    pub provision2: f64,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for SalesPerson {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for SalesPerson {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.salesman_name.as_str()),
            Cow::Borrowed(self.salesman_phone.as_str()),
            Cow::Borrowed(self.salesman_fax.as_str()),
            Cow::Borrowed(self.salesman_email.as_str()),
        ]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for SalesPerson {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// Point of sale: a named sales channel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalesPos {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub pos_name: String,
    #[serde(with = "flag", default)]
    pub cash_sale: bool,
    #[serde(with = "flag", default)]
    pub credit_sale: bool,
    /// Default dispatch location code
    pub pos_location: String,
    /// Cash account the POS posts to
    #[serde(default)]
    pub pos_account: u32,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for SalesPos {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for SalesPos {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.pos_name.as_str()), Cow::Borrowed(self.pos_location.as_str())]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for SalesPos {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// Price list kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalesType {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub sales_type: String,
    #[serde(with = "flag", default)]
    pub tax_included: bool,
    #[serde(with = "number", default)]
    pub factor: f64,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for SalesType {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for SalesType {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.sales_type.as_str())]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

/// A customer account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub debtor_no: u32,
    pub name: String,
    /// Short name
    pub debtor_ref: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tax_id: String,
    pub curr_code: String,
    pub sales_type: u32,
    #[serde(with = "number", default)]
    pub credit_limit: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for Customer {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.debtor_no
    }
}

impl Listable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.debtor_ref.as_str()),
            Cow::Borrowed(self.tax_id.as_str()),
            Cow::Borrowed(self.curr_code.as_str()),
        ]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for Customer {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// Header of a customer's sales order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub order_no: u32,
    pub debtor_no: u32,
    pub reference: String,
    #[serde(default)]
    pub customer_ref: String,
    pub ord_date: NaiveDate,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// Sales type id
    #[serde(default)]
    pub order_type: u32,
    pub from_stk_loc: String,
    #[serde(with = "number", default)]
    pub total: f64,
}

impl Entity for SalesOrder {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.order_no
    }
}

impl Listable for SalesOrder {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.order_no.to_string()),
            Cow::Borrowed(self.reference.as_str()),
            Cow::Borrowed(self.customer_ref.as_str()),
        ]
    }
}
