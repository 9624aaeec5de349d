//! Inventory Location Entity

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::entity::{flag, Deactivatable, Entity, Listable};

/// A stock holding location, keyed by a user-chosen code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InventoryLocation {
    pub loc_code: String,
    pub location_name: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub phone2: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(with = "flag", default)]
    pub fixed_asset: bool,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for InventoryLocation {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.loc_code.clone()
    }
}

impl Listable for InventoryLocation {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.loc_code.as_str()),
            Cow::Borrowed(self.location_name.as_str()),
            Cow::Borrowed(self.contact.as_str()),
            Cow::Borrowed(self.phone.as_str()),
            Cow::Borrowed(self.email.as_str()),
        ]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for InventoryLocation {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}
