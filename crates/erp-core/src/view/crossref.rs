//! Cross-Reference Resolution
//!
//! Foreign keys are shown as labels by scanning a sibling collection that
//! was fetched independently. Lookups are linear; collections are small.

use std::borrow::Cow;

use crate::domain::{
    Bom, Customer, InventoryLocation, InventoryTransfer, Item, ItemCategory, Listable, WorkCentre,
};

/// Label of the first row whose key equals `key`
pub fn resolve<'a, T, K, FK, FL>(rows: &'a [T], key: &K, key_of: FK, label_of: FL) -> Option<&'a str>
where
    K: PartialEq + ?Sized,
    FK: Fn(&T) -> &K,
    FL: Fn(&'a T) -> &'a str,
{
    rows.iter().find(|row| key_of(*row) == key).map(label_of)
}

/// Resolved label, or the raw code when the sibling row is missing
pub fn label_or_code(label: Option<&str>, code: impl ToString) -> String {
    match label {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => code.to_string(),
    }
}

pub fn location_name<'a>(locations: &'a [InventoryLocation], loc_code: &str) -> Option<&'a str> {
    resolve(locations, loc_code, |l| l.loc_code.as_str(), |l| l.location_name.as_str())
}

pub fn item_description(items: &[Item], stock_id: u32) -> Option<&str> {
    items.iter().find(|i| i.stock_id == stock_id).map(|i| i.description.as_str())
}

pub fn work_centre_name(work_centres: &[WorkCentre], id: u32) -> Option<&str> {
    work_centres.iter().find(|w| w.id == id).map(|w| w.name.as_str())
}

pub fn customer_name(customers: &[Customer], debtor_no: u32) -> Option<&str> {
    customers.iter().find(|c| c.debtor_no == debtor_no).map(|c| c.name.as_str())
}

pub fn category_name(categories: &[ItemCategory], category_id: u32) -> Option<&str> {
    categories.iter().find(|c| c.category_id == category_id).map(|c| c.description.as_str())
}

/// A BOM line ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct BomRow {
    pub bom: Bom,
    pub component_description: String,
    pub location_name: String,
    pub work_centre_name: String,
}

impl Listable for BomRow {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.component_description.as_str()),
            Cow::Borrowed(self.location_name.as_str()),
            Cow::Borrowed(self.work_centre_name.as_str()),
        ]
    }
}

/// Component lines of one parent item, labelled, in backend order
pub fn bom_rows(
    boms: &[Bom],
    parent: u32,
    items: &[Item],
    locations: &[InventoryLocation],
    work_centres: &[WorkCentre],
) -> Vec<BomRow> {
    boms.iter()
        .filter(|bom| bom.parent == parent)
        .map(|bom| BomRow {
            component_description: label_or_code(item_description(items, bom.component), bom.component),
            location_name: label_or_code(location_name(locations, &bom.loc_code), &bom.loc_code),
            work_centre_name: label_or_code(work_centre_name(work_centres, bom.work_centre), bom.work_centre),
            bom: bom.clone(),
        })
        .collect()
}

/// One parent that uses the inquired component
#[derive(Debug, Clone, PartialEq)]
pub struct WhereUsedRow {
    pub parent: u32,
    pub parent_description: String,
    pub location_name: String,
    pub quantity: f64,
}

impl Listable for WhereUsedRow {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.parent_description.as_str()), Cow::Borrowed(self.location_name.as_str())]
    }
}

/// Every BOM line that consumes `component`
pub fn where_used(boms: &[Bom], component: u32, items: &[Item], locations: &[InventoryLocation]) -> Vec<WhereUsedRow> {
    boms.iter()
        .filter(|bom| bom.component == component)
        .map(|bom| WhereUsedRow {
            parent: bom.parent,
            parent_description: label_or_code(item_description(items, bom.parent), bom.parent),
            location_name: label_or_code(location_name(locations, &bom.loc_code), &bom.loc_code),
            quantity: bom.quantity,
        })
        .collect()
}

/// A transfer with item and both locations labelled
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRow {
    pub transfer: InventoryTransfer,
    pub item_description: String,
    pub from_name: String,
    pub to_name: String,
}

impl Listable for TransferRow {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.transfer.reference.as_str()),
            Cow::Borrowed(self.item_description.as_str()),
            Cow::Borrowed(self.from_name.as_str()),
            Cow::Borrowed(self.to_name.as_str()),
        ]
    }
}

pub fn transfer_rows(
    transfers: &[InventoryTransfer],
    items: &[Item],
    locations: &[InventoryLocation],
) -> Vec<TransferRow> {
    transfers
        .iter()
        .map(|t| TransferRow {
            item_description: label_or_code(item_description(items, t.stock_id), t.stock_id),
            from_name: label_or_code(location_name(locations, &t.from_loc), &t.from_loc),
            to_name: label_or_code(location_name(locations, &t.to_loc), &t.to_loc),
            transfer: t.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn locations() -> Vec<InventoryLocation> {
        vec![
            InventoryLocation { loc_code: "DEF".into(), location_name: "Default".into(), ..Default::default() },
            InventoryLocation { loc_code: "WH2".into(), location_name: "Warehouse 2".into(), ..Default::default() },
        ]
    }

    fn items() -> Vec<Item> {
        vec![
            Item { stock_id: 10, description: "Bicycle".into(), ..Default::default() },
            Item { stock_id: 20, description: "Wheel".into(), ..Default::default() },
            Item { stock_id: 30, description: "Tricycle".into(), ..Default::default() },
        ]
    }

    #[test]
    fn test_location_name_lookup() {
        assert_eq!(location_name(&locations(), "WH2"), Some("Warehouse 2"));
        assert_eq!(location_name(&locations(), "XYZ"), None);
    }

    #[test]
    fn test_missing_reference_falls_back_to_code() {
        assert_eq!(label_or_code(location_name(&locations(), "XYZ"), "XYZ"), "XYZ");
        assert_eq!(label_or_code(Some(""), 7), "7");
    }

    #[test]
    fn test_bom_rows_for_parent() {
        let centres = vec![WorkCentre { id: 1, name: "Assembly".into(), ..Default::default() }];
        let boms = vec![
            Bom { id: 1, parent: 10, component: 20, work_centre: 1, loc_code: "DEF".into(), quantity: 2.0 },
            Bom { id: 2, parent: 30, component: 20, work_centre: 1, loc_code: "WH2".into(), quantity: 3.0 },
            Bom { id: 3, parent: 10, component: 99, work_centre: 5, loc_code: "DEF".into(), quantity: 1.0 },
        ];
        let rows = bom_rows(&boms, 10, &items(), &locations(), &centres);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].component_description, "Wheel");
        assert_eq!(rows[0].location_name, "Default");
        assert_eq!(rows[0].work_centre_name, "Assembly");
        assert_eq!(rows[1].component_description, "99");
        assert_eq!(rows[1].work_centre_name, "5");
    }

    #[test]
    fn test_where_used() {
        let boms = vec![
            Bom { id: 1, parent: 10, component: 20, work_centre: 1, loc_code: "DEF".into(), quantity: 2.0 },
            Bom { id: 2, parent: 30, component: 20, work_centre: 1, loc_code: "WH2".into(), quantity: 3.0 },
        ];
        let rows = where_used(&boms, 20, &items(), &locations());
        let parents: Vec<&str> = rows.iter().map(|r| r.parent_description.as_str()).collect();
        assert_eq!(parents, vec!["Bicycle", "Tricycle"]);
        assert_eq!(rows[1].location_name, "Warehouse 2");
        assert!(where_used(&boms, 10, &items(), &locations()).is_empty());
    }

    #[test]
    fn test_transfer_rows() {
        let transfers = vec![InventoryTransfer {
            id: 1,
            reference: "T-1".into(),
            stock_id: 20,
            from_loc: "DEF".into(),
            to_loc: "WH2".into(),
            quantity: 4.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }];
        let rows = transfer_rows(&transfers, &items(), &locations());
        assert_eq!(rows[0].item_description, "Wheel");
        assert!(crate::view::list_view::matches_filter(&rows[0], "warehouse"));
        assert_eq!((rows[0].from_name.as_str(), rows[0].to_name.as_str()), ("Default", "Warehouse 2"));
    }
}
