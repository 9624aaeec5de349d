//! In-memory repository double that records every call

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Entity};
use crate::repository::Repository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calls<Id> {
    pub list: usize,
    pub found: usize,
    pub created: usize,
    pub updated: usize,
    pub deleted: Vec<Id>,
}

struct State<T: Entity> {
    rows: Vec<T>,
    calls: Calls<T::Id>,
    fail_reads: Option<DomainError>,
    fail_writes: Option<DomainError>,
}

pub struct MemoryRepository<T: Entity> {
    state: Rc<RefCell<State<T>>>,
}

impl<T: Entity> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                rows,
                calls: Calls { list: 0, found: 0, created: 0, updated: 0, deleted: Vec::new() },
                fail_reads: None,
                fail_writes: None,
            })),
        }
    }

    pub fn calls(&self) -> Calls<T::Id> {
        self.state.borrow().calls.clone()
    }

    pub fn rows(&self) -> Vec<T> {
        self.state.borrow().rows.clone()
    }

    pub fn fail_reads(&self, err: DomainError) {
        self.state.borrow_mut().fail_reads = Some(err);
    }

    pub fn fail_writes(&self, err: DomainError) {
        self.state.borrow_mut().fail_writes = Some(err);
    }

    fn write_guard(&self) -> DomainResult<()> {
        match &self.state.borrow().fail_writes {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        self.state.borrow_mut().calls.created += 1;
        self.write_guard()?;
        self.state.borrow_mut().rows.push(entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &T::Id) -> DomainResult<T> {
        let mut state = self.state.borrow_mut();
        state.calls.found += 1;
        if let Some(err) = &state.fail_reads {
            return Err(err.clone());
        }
        state
            .rows
            .iter()
            .find(|row| &row.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        let mut state = self.state.borrow_mut();
        state.calls.list += 1;
        match &state.fail_reads {
            Some(err) => Err(err.clone()),
            None => Ok(state.rows.clone()),
        }
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        self.state.borrow_mut().calls.updated += 1;
        self.write_guard()?;
        let mut state = self.state.borrow_mut();
        let slot = state
            .rows
            .iter_mut()
            .find(|row| row.id() == entity.id())
            .ok_or_else(|| DomainError::NotFound(entity.id().to_string()))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &T::Id) -> DomainResult<()> {
        self.state.borrow_mut().calls.deleted.push(id.clone());
        self.write_guard()?;
        self.state.borrow_mut().rows.retain(|row| &row.id() != id);
        Ok(())
    }
}
