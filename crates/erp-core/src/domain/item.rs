//! Item and Item Category Entities

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::entity::{flag, is_unassigned, Deactivatable, Entity, Listable};

/// How an item is sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MbFlag {
    /// Built in-house from a bill of material
    #[serde(rename = "M")]
    Manufactured,
    /// Bought from suppliers
    #[default]
    #[serde(rename = "B")]
    Purchased,
    /// Service, no stock
    #[serde(rename = "D")]
    Service,
}

impl MbFlag {
    pub fn label(&self) -> &'static str {
        match self {
            MbFlag::Manufactured => "Manufactured",
            MbFlag::Purchased => "Purchased",
            MbFlag::Service => "Service",
        }
    }
}

/// A stock item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Item {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub stock_id: u32,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub category_id: u32,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub mb_flag: MbFlag,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Item {
    pub fn is_manufactured(&self) -> bool {
        self.mb_flag == MbFlag::Manufactured
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.stock_id
    }
}

impl Listable for Item {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.stock_id.to_string()),
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.units.as_str()),
        ]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for Item {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// Grouping of items with default sourcing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemCategory {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub category_id: u32,
    pub description: String,
    #[serde(default)]
    pub dflt_mb_flag: MbFlag,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for ItemCategory {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.category_id
    }
}

impl Listable for ItemCategory {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.description.as_str())]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mb_flag_codes() {
        let item: Item = serde_json::from_str(r#"{"stock_id": 10, "description": "Bike", "mb_flag": "M"}"#).unwrap();
        assert!(item.is_manufactured());
        assert_eq!(serde_json::to_value(MbFlag::Service).unwrap(), "D");
    }

    #[test]
    fn test_item_search_includes_stock_id() {
        let item = Item { stock_id: 42, description: "Wheel".into(), ..Default::default() };
        assert!(item.search_fields().iter().any(|f| f == "42"));
    }
}
