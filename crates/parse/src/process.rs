//! Rendering-transformation processes known to the runtime.

use std::collections::HashMap;

/// How a process input gets its value when the document does not give one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The layer data being styled.
    Data,
    OutputBbox,
    OutputWidth,
    OutputHeight,
    Other,
}

impl InputRole {
    /// The `env` variable supplying a map-request-derived input.
    pub fn env_default(self) -> Option<&'static str> {
        match self {
            InputRole::OutputBbox => Some("wms_bbox"),
            InputRole::OutputWidth => Some("wms_width"),
            InputRole::OutputHeight => Some("wms_height"),
            InputRole::Data | InputRole::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInput {
    pub name: String,
    pub role: InputRole,
}

impl ProcessInput {
    pub fn new(name: impl Into<String>, role: InputRole) -> Self {
        Self { name: name.into(), role }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescription {
    pub name: String,
    pub inputs: Vec<ProcessInput>,
}

/// The catalog of processes that transforms may name.
pub trait ProcessCatalog: Send + Sync {
    fn describe(&self, name: &str) -> Option<ProcessDescription>;
}

/// A catalog backed by a map of registered descriptions.
#[derive(Debug, Default, Clone)]
pub struct StaticProcessCatalog {
    processes: HashMap<String, ProcessDescription>,
}

impl StaticProcessCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, inputs: Vec<ProcessInput>) -> &mut Self {
        let name = name.into();
        self.processes
            .insert(name.clone(), ProcessDescription { name, inputs });
        self
    }
}

impl ProcessCatalog for StaticProcessCatalog {
    fn describe(&self, name: &str) -> Option<ProcessDescription> {
        self.processes.get(name).cloned()
    }
}
