//! Workflow State Derivation
//!
//! Which work-order and BOM actions a screen offers, derived from the
//! record's released/closed/manufactured flags, and the record-level
//! transitions behind the buttons.

use chrono::NaiveDate;

use crate::domain::{DomainError, DomainResult, Item, WorkOrder, WorkOrderType};

/// Buttons enabled for one work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkOrderActions {
    pub edit: bool,
    pub delete: bool,
    pub release: bool,
    pub issue: bool,
    pub add_costs: bool,
    pub produce: bool,
    pub close: bool,
}

impl WorkOrderActions {
    pub fn is_view_only(&self) -> bool {
        *self == WorkOrderActions::default()
    }
}

/// Status text for the work-order table
pub fn work_order_status(order: &WorkOrder) -> &'static str {
    if order.closed {
        "Closed"
    } else if order.released {
        "Released"
    } else {
        "Open"
    }
}

pub fn work_order_actions(order: &WorkOrder) -> WorkOrderActions {
    if order.closed {
        return WorkOrderActions::default();
    }
    match order.wo_type {
        // Single-step orders are complete as soon as they are entered
        WorkOrderType::Assemble | WorkOrderType::Unassemble => WorkOrderActions::default(),
        WorkOrderType::AdvancedManufacture if !order.released => WorkOrderActions {
            edit: true,
            delete: true,
            release: true,
            ..Default::default()
        },
        WorkOrderType::AdvancedManufacture => WorkOrderActions {
            issue: true,
            add_costs: true,
            produce: true,
            close: true,
            ..Default::default()
        },
    }
}

fn conflict(order: &WorkOrder, action: &str) -> DomainError {
    DomainError::Conflict(format!(
        "Work order {} is {} and cannot be {}",
        order.wo_ref,
        work_order_status(order).to_lowercase(),
        action
    ))
}

/// Release an open advanced order to the shop floor
pub fn release(order: &WorkOrder, on: NaiveDate) -> DomainResult<WorkOrder> {
    if !work_order_actions(order).release {
        return Err(conflict(order, "released"));
    }
    Ok(WorkOrder { released: true, released_date: Some(on), ..order.clone() })
}

/// Record finished units; the order closes once the required quantity is reached
pub fn produce(order: &WorkOrder, quantity: f64) -> DomainResult<WorkOrder> {
    if !work_order_actions(order).produce {
        return Err(conflict(order, "produced"));
    }
    if quantity.is_nan() || quantity <= 0.0 {
        return Err(DomainError::InvalidInput("Quantity must be greater than zero".to_string()));
    }
    let units_issued = order.units_issued + quantity;
    Ok(WorkOrder { units_issued, closed: units_issued >= order.units_reqd, ..order.clone() })
}

pub fn add_costs(order: &WorkOrder, amount: f64) -> DomainResult<WorkOrder> {
    if !work_order_actions(order).add_costs {
        return Err(conflict(order, "costed"));
    }
    if amount.is_nan() || amount <= 0.0 {
        return Err(DomainError::InvalidInput("Amount must be greater than zero".to_string()));
    }
    Ok(WorkOrder { additional_costs: order.additional_costs + amount, ..order.clone() })
}

pub fn close(order: &WorkOrder) -> DomainResult<WorkOrder> {
    if !work_order_actions(order).close {
        return Err(conflict(order, "closed"));
    }
    Ok(WorkOrder { closed: true, ..order.clone() })
}

/// Items that may own a bill of material
pub fn bom_parent_candidates(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.is_manufactured() && !item.inactive).collect()
}

/// Items that may be added as components under `parent`
pub fn bom_component_candidates(items: &[Item], parent: u32) -> Vec<&Item> {
    items.iter().filter(|item| item.stock_id != parent && !item.inactive).collect()
}
