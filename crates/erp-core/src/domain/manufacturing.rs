//! Manufacturing Entities
//!
//! Work centres, bills of material and work orders.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{flag, is_unassigned, number, Deactivatable, Entity, Listable};

/// A place where manufacturing steps are performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkCentre {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "flag", default)]
    pub inactive: bool,
}

impl Entity for WorkCentre {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for WorkCentre {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.description.as_str())]
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}

impl Deactivatable for WorkCentre {
    fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }
}

/// One component line of a parent item's bill of material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Bom {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    /// Parent item stock id
    pub parent: u32,
    /// Component item stock id
    pub component: u32,
    pub work_centre: u32,
    pub loc_code: String,
    #[serde(with = "number")]
    pub quantity: f64,
}

impl Bom {
    /// Parent, component, location and work centre identify a line uniquely
    pub fn same_line_as(&self, other: &Bom) -> bool {
        self.parent == other.parent
            && self.component == other.component
            && self.loc_code == other.loc_code
            && self.work_centre == other.work_centre
    }
}

impl Entity for Bom {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for Bom {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(self.component.to_string()), Cow::Borrowed(self.loc_code.as_str())]
    }
}

/// Work order kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorkOrderType {
    /// Build the item from its components in one step
    #[default]
    Assemble,
    /// Break the item down into its components in one step
    Unassemble,
    /// Released, issued and produced over several steps
    AdvancedManufacture,
}

impl WorkOrderType {
    pub const ALL: [WorkOrderType; 3] =
        [WorkOrderType::Assemble, WorkOrderType::Unassemble, WorkOrderType::AdvancedManufacture];

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderType::Assemble => "Assemble",
            WorkOrderType::Unassemble => "Unassemble",
            WorkOrderType::AdvancedManufacture => "Advanced Manufacture",
        }
    }
}

impl TryFrom<u8> for WorkOrderType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WorkOrderType::Assemble),
            1 => Ok(WorkOrderType::Unassemble),
            2 => Ok(WorkOrderType::AdvancedManufacture),
            other => Err(format!("unknown work order type {}", other)),
        }
    }
}

impl From<WorkOrderType> for u8 {
    fn from(value: WorkOrderType) -> Self {
        match value {
            WorkOrderType::Assemble => 0,
            WorkOrderType::Unassemble => 1,
            WorkOrderType::AdvancedManufacture => 2,
        }
    }
}

/// A manufacturing instruction for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: u32,
    pub wo_ref: String,
    pub loc_code: String,
    #[serde(with = "number")]
    pub units_reqd: f64,
    pub stock_id: u32,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub wo_type: WorkOrderType,
    pub required_by: NaiveDate,
    #[serde(default)]
    pub released_date: Option<NaiveDate>,
    #[serde(with = "number", default)]
    pub units_issued: f64,
    #[serde(with = "flag", default)]
    pub closed: bool,
    #[serde(with = "flag", default)]
    pub released: bool,
    #[serde(with = "number", default)]
    pub additional_costs: f64,
}

impl WorkOrder {
    /// Units still to be produced
    pub fn units_outstanding(&self) -> f64 {
        (self.units_reqd - self.units_issued).max(0.0)
    }
}

impl Entity for WorkOrder {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Listable for WorkOrder {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.wo_ref.as_str()),
            Cow::Borrowed(self.loc_code.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_order_type_is_numeric() {
        let raw = r#"{
            "id": 7, "wo_ref": "WO-7", "loc_code": "DEF", "units_reqd": "5",
            "stock_id": 10, "date": "2024-01-02", "type": 2, "required_by": "2024-01-20",
            "released": 1, "closed": 0
        }"#;
        let order: WorkOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.wo_type, WorkOrderType::AdvancedManufacture);
        assert!(order.released);
        assert_eq!(order.units_outstanding(), 5.0);
        assert_eq!(serde_json::to_value(&order).unwrap()["type"], 2);
    }

    #[test]
    fn test_unknown_work_order_type_rejected() {
        let raw = r#"{"wo_ref": "x", "loc_code": "A", "units_reqd": 1, "stock_id": 1,
            "date": "2024-01-02", "type": 9, "required_by": "2024-01-02"}"#;
        assert!(serde_json::from_str::<WorkOrder>(raw).is_err());
    }

    #[test]
    fn test_bom_line_identity_ignores_quantity() {
        let a = Bom { id: 1, parent: 10, component: 20, work_centre: 1, loc_code: "A".into(), quantity: 1.0 };
        let b = Bom { id: 2, quantity: 4.0, ..a.clone() };
        assert!(a.same_line_as(&b));
        let c = Bom { loc_code: "B".into(), ..a.clone() };
        assert!(!a.same_line_as(&c));
    }
}
