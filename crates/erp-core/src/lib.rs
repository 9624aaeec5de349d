//! ERP Admin Core
//!
//! Layered architecture:
//! - domain: Entities as the REST backend returns them
//! - repository: API client adapter and CRUD abstractions
//! - view: List pipeline, form pipeline, cross references, workflows
//! - forms: Local form state for every add/edit screen
//! - config: Client configuration

pub mod config;
pub mod domain;
pub mod forms;
pub mod repository;
pub mod view;

pub use config::ApiConfig;
pub use domain::{DomainError, DomainResult, Entity, Listable};
pub use repository::{ApiClient, Repository, Resource, RestRepository};
