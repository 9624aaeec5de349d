//! Supplier Entity

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::entity::{flag, is_unassigned, number, Deactivatable, Entity, Listable};

/// A supplier account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub supplier_id: u32,
    pub supp_name: String,
    /// Short name
    pub supp_ref: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gst_no: String,
    #[serde(default)]
    pub contact: String,
    pub curr_code: String,
    #[serde(with = "number", default)]
    pub credit_limit: f64,
    #[serde(with = "flag", default)]
    pub tax_included: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for Supplier {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.supplier_id
    }
}

impl Listable for Supplier {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.supp_name.as_str()),
            Cow::Borrowed(self.supp_ref.as_str()),
            Cow::Borrowed(self.curr_code.as_str()),
        ]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for Supplier {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}
