use crate::domain::{DomainError, DomainResult, WorkOrder, WorkOrderType};
use crate::view::form::{
    parse_date, require, require_date, require_positive, require_selected, EntityForm, FormErrors, SubmitMode,
};

use super::{number, text};

/// Entry fields of a work order. Progress fields (issued units, costs,
/// release state) are carried over unchanged from the record being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkOrderForm {
    pub wo_ref: String,
    pub wo_type: WorkOrderType,
    pub stock_id: u32,
    pub loc_code: String,
    pub units_reqd: String,
    pub date: String,
    pub required_by: String,
    progress: Option<WorkOrder>,
}

impl WorkOrderForm {
    /// Blank order dated `today`
    pub fn dated(today: chrono::NaiveDate) -> Self {
        let today = today.format("%Y-%m-%d").to_string();
        Self { units_reqd: "1".to_string(), date: today.clone(), required_by: today, ..Default::default() }
    }
}

impl EntityForm for WorkOrderForm {
    type Entity = WorkOrder;

    fn from_entity(order: &WorkOrder) -> Self {
        Self {
            wo_ref: order.wo_ref.clone(),
            wo_type: order.wo_type,
            stock_id: order.stock_id,
            loc_code: order.loc_code.clone(),
            units_reqd: order.units_reqd.to_string(),
            date: order.date.format("%Y-%m-%d").to_string(),
            required_by: order.required_by.format("%Y-%m-%d").to_string(),
            progress: Some(order.clone()),
        }
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        require(&mut errors, "wo_ref", &self.wo_ref, "Reference is required");
        require_selected(&mut errors, "stock_id", self.stock_id, "Select an item to manufacture");
        require(&mut errors, "loc_code", &self.loc_code, "Select a location");
        require_positive(&mut errors, "units_reqd", &self.units_reqd);
        let date = require_date(&mut errors, "date", &self.date);
        let required_by = require_date(&mut errors, "required_by", &self.required_by);
        if let (Some(date), Some(required_by)) = (date, required_by) {
            if required_by < date {
                errors.insert("required_by", "Required-by date cannot be before the order date");
            }
        }
        errors
    }

    fn to_entity(&self, mode: &SubmitMode<u32>) -> DomainResult<WorkOrder> {
        let invalid_date = || DomainError::InvalidInput("Invalid date".to_string());
        let date = parse_date(&self.date).ok_or_else(invalid_date)?;
        let required_by = parse_date(&self.required_by).ok_or_else(invalid_date)?;
        let progress = self.progress.as_ref();
        Ok(WorkOrder {
            id: mode.editing().copied().unwrap_or(0),
            wo_ref: text(&self.wo_ref),
            loc_code: text(&self.loc_code),
            units_reqd: number(&self.units_reqd),
            stock_id: self.stock_id,
            date,
            wo_type: self.wo_type,
            required_by,
            released_date: progress.and_then(|o| o.released_date),
            units_issued: progress.map_or(0.0, |o| o.units_issued),
            closed: progress.is_some_and(|o| o.closed),
            released: progress.is_some_and(|o| o.released),
            additional_costs: progress.map_or(0.0, |o| o.additional_costs),
        })
    }

    fn conflicts(&self, existing: &[WorkOrder], editing: Option<&u32>) -> FormErrors {
        let mut errors = FormErrors::new();
        let reference = text(&self.wo_ref);
        if existing.iter().any(|o| Some(&o.id) != editing && o.wo_ref == reference) {
            errors.insert("wo_ref", "This reference is already in use");
        }
        errors
    }
}
