//! View Layer
//!
//! Pure pipelines behind the tables and forms: list derivation, remote
//! collection control, form validation and submission, cross references,
//! workflow state and invalidation topics.

pub mod crossref;
pub mod form;
pub mod list_view;
pub mod remote;
pub mod topics;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use form::{apply_edit, check, load_for_edit, submit, EntityForm, FormErrors, SubmitError, SubmitMode};
pub use list_view::{visible_rows, ListPage, ListState, PageSize};
pub use remote::{Mutation, RemoteCollection};
pub use topics::{InvalidationTopics, Topic};
