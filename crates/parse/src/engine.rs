//! The handler stack engine.
//!
//! A walk holds a LIFO stack of `(node, handler)` work items. Each popped
//! handler reads its node, writes into the model objects it was given, and
//! may push further items. Items pushed last run first, and an item runs to
//! completion, including everything it pushes, before anything that was
//! already on the stack underneath it.

use crate::draft::{Commit, CommitAll, Draft};
use crate::error::{ParseError, Warning, WarningKind};
use crate::hints::Hints;
use serde_json::Value;

/// A unit of behaviour invoked exactly once on one document node.
pub trait Handler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError>;
}

struct WorkItem<'doc> {
    node: &'doc Value,
    handler: Box<dyn Handler>,
}

/// What a handler sees of the walk: the hints, the stack and the warning log.
pub struct Context<'doc, 'h> {
    stack: Vec<WorkItem<'doc>>,
    hints: &'h Hints,
    warnings: Vec<Warning>,
    current: &'doc Value,
}

/// Walks `root` starting with `handler` until the stack drains. Any handler
/// error aborts the walk.
pub fn run<'doc>(root: &'doc Value, handler: impl Handler + 'static, hints: &Hints) -> Result<Vec<Warning>, ParseError> {
    let mut ctx = Context {
        stack: Vec::new(),
        hints,
        warnings: Vec::new(),
        current: root,
    };
    ctx.push(root, handler);
    let mut steps = 0usize;
    while let Some(WorkItem { node, handler }) = ctx.stack.pop() {
        ctx.current = node;
        handler.handle(node, &mut ctx)?;
        steps += 1;
    }
    log::debug!("Walk finished after {steps} handler invocations");
    Ok(ctx.warnings)
}

impl<'doc, 'h> Context<'doc, 'h> {
    pub fn hints(&self) -> &'h Hints {
        self.hints
    }

    /// The node of the handler being invoked.
    pub fn current(&self) -> &'doc Value {
        self.current
    }

    pub fn push(&mut self, node: &'doc Value, handler: impl Handler + 'static) {
        self.stack.push(WorkItem { node, handler: Box::new(handler) });
    }

    /// Pushes `handler` on `key` of the current node, if present and not null.
    pub fn push_key(&mut self, key: &str, handler: impl Handler + 'static) -> bool {
        self.push_in(self.current, key, handler)
    }

    /// Pushes `handler` on `key` of `scope`, if present and not null.
    pub fn push_in(&mut self, scope: &'doc Value, key: &str, handler: impl Handler + 'static) -> bool {
        match child(scope, key) {
            Some(node) => {
                self.push(node, handler);
                true
            }
            None => false,
        }
    }

    /// Schedules `setter` to receive `draft` once everything pushed after
    /// this call has run. Nothing happens if the draft is never created.
    pub fn commit<T: 'static>(&mut self, draft: &Draft<T>, setter: impl FnOnce(T) + 'static) {
        self.push(self.current, Commit::new(draft.clone(), setter));
    }

    pub fn commit_all<T: 'static>(&mut self, drafts: Vec<Draft<T>>, setter: impl FnOnce(Vec<T>) + 'static) {
        self.push(self.current, CommitAll::new(drafts, setter));
    }

    /// Runs `handler` on `node` and then commits `draft` through `setter`.
    pub fn delegate<T: 'static>(
        &mut self,
        node: &'doc Value,
        draft: &Draft<T>,
        handler: impl Handler + 'static,
        setter: impl FnOnce(T) + 'static,
    ) {
        self.commit(draft, setter);
        self.push(node, handler);
    }

    /// [`Context::delegate`] on `key` of the current node; a no-op when absent.
    pub fn delegate_key<T: 'static>(
        &mut self,
        key: &str,
        draft: &Draft<T>,
        handler: impl Handler + 'static,
        setter: impl FnOnce(T) + 'static,
    ) -> bool {
        match child(self.current, key) {
            Some(node) => {
                self.delegate(node, draft, handler, setter);
                true
            }
            None => false,
        }
    }

    /// Records a recoverable problem. The walk continues.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = Warning { kind, message: message.into() };
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// `key` of a mapping node, treating an explicit null as absent.
pub fn child<'doc>(node: &'doc Value, key: &str) -> Option<&'doc Value> {
    node.get(key).filter(|value| !value.is_null())
}
