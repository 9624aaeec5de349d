//! Domain Layer
//!
//! Records as the REST backend serves them. No lifecycle is managed here.

mod currency;
mod entity;
mod item;
mod location;
mod manufacturing;
mod sales;
mod supplier;
mod transfer;

pub use currency::{Currency, ExchangeRate};
pub use entity::{Deactivatable, DomainError, DomainResult, Entity, Listable, GENERIC_ERROR_MESSAGE};
pub use item::{Item, ItemCategory, MbFlag};
pub use location::InventoryLocation;
pub use manufacturing::{Bom, WorkCentre, WorkOrder, WorkOrderType};
pub use sales::{Customer, SalesOrder, SalesPerson, SalesPos, SalesType};
pub use supplier::Supplier;
pub use transfer::InventoryTransfer;
