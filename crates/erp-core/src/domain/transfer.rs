//! Inventory Transfer Entity

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{is_unassigned, number, Entity, Listable};

/// A stock movement between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTransfer {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub reference: String,
    pub stock_id: u32,
    pub from_loc: String,
    pub to_loc: String,
    #[serde(with = "number")]
    pub quantity: f64,
    pub date: NaiveDate,
}

impl Entity for InventoryTransfer {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for InventoryTransfer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.reference.as_str())]
    }
}
