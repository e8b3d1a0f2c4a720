//! Lazily created model objects shared between a handler and its parent.

use crate::engine::{Context, Handler};
use crate::error::ParseError;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// A model object that may not exist yet.
///
/// Handlers write through [`Draft::with`], which creates the object on first
/// use. The parent hands the finished object to its setter with a [`Commit`]
/// item, and a draft that was never created contributes nothing.
pub struct Draft<T> {
    cell: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for Draft<T> {
    fn clone(&self) -> Self {
        Self { cell: Rc::clone(&self.cell) }
    }
}

impl<T> Default for Draft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Draft<T> {
    pub fn new() -> Self {
        Self { cell: Rc::new(RefCell::new(None)) }
    }

    /// A draft whose object already exists, for collection elements.
    pub fn created(value: T) -> Self {
        Self { cell: Rc::new(RefCell::new(Some(value))) }
    }

    pub fn is_created(&self) -> bool {
        self.cell.borrow().is_some()
    }

    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = Some(value);
    }

    pub fn take(&self) -> Option<T> {
        self.cell.borrow_mut().take()
    }
}

impl<T: Default> Draft<T> {
    /// Creates the object if absent, then applies `f` to it.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut slot = self.cell.borrow_mut();
        f(slot.get_or_insert_with(T::default))
    }
}

/// Hands a finished draft to its parent. Pushed before the handler that
/// fills the draft, so it runs once that handler's subtree is done.
pub struct Commit<T> {
    draft: Draft<T>,
    setter: Box<dyn FnOnce(T)>,
}

impl<T> Commit<T> {
    pub fn new(draft: Draft<T>, setter: impl FnOnce(T) + 'static) -> Self {
        Self { draft, setter: Box::new(setter) }
    }
}

impl<T> Handler for Commit<T> {
    fn handle<'doc>(self: Box<Self>, _node: &'doc Value, _ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let Commit { draft, setter } = *self;
        if let Some(value) = draft.take() {
            setter(value);
        }
        Ok(())
    }
}

/// Hands every created draft of a collection to its parent, in document order.
pub struct CommitAll<T> {
    drafts: Vec<Draft<T>>,
    setter: Box<dyn FnOnce(Vec<T>)>,
}

impl<T> CommitAll<T> {
    pub fn new(drafts: Vec<Draft<T>>, setter: impl FnOnce(Vec<T>) + 'static) -> Self {
        Self { drafts, setter: Box::new(setter) }
    }
}

impl<T> Handler for CommitAll<T> {
    fn handle<'doc>(self: Box<Self>, _node: &'doc Value, _ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let CommitAll { drafts, setter } = *self;
        let values: Vec<T> = drafts.iter().filter_map(Draft::take).collect();
        if !values.is_empty() {
            setter(values);
        }
        Ok(())
    }
}
