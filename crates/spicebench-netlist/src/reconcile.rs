use std::collections::HashMap;
use std::path::Path;

use crate::edit::NetlistError;

/// One declared component mirrored from the netlist: name, connection
/// nodes, value. The mirror is maintained by the external netlist
/// converter, not by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub name: String,
    pub nodes: Vec<String>,
    pub value: String,
}

impl ComponentEntry {
    pub fn new<I, S>(name: impl Into<String>, nodes: I, value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            nodes: nodes.into_iter().map(|n| n.into()).collect(),
            value: value.into(),
        }
    }
}

/// Map from a component's declared value token to the model it references.
///
/// Tracks which `.INCLUDE` lines are active so they can be retracted when
/// a component's value moves away from a model reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    entries: HashMap<String, String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value_token: impl Into<String>, model: impl Into<String>) {
        self.entries.insert(value_token.into(), model.into());
    }

    pub fn model_for(&self, value_token: &str) -> Option<&str> {
        self.entries.get(value_token).map(String::as_str)
    }

    pub fn remove(&mut self, value_token: &str) -> Option<String> {
        self.entries.remove(value_token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Models whose `.INCLUDE` lines are active after the pass.
    pub active_models: Vec<String>,
}

/// Rewrites `.INCLUDE` directives so they match the models currently
/// referenced by the component list.
///
/// The implementation lives with the external netlist converter; this
/// crate depends only on the contract and re-runs it after any edit that
/// can change which models are referenced.
pub trait ModelReconciler {
    fn reconcile(
        &mut self,
        input: &Path,
        output: &Path,
        components: &[ComponentEntry],
        models: &ModelRegistry,
    ) -> Result<ReconcileReport, NetlistError>;
}

/// Reconciler for netlists that do not use model includes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReconciler;

impl ModelReconciler for NoReconciler {
    fn reconcile(
        &mut self,
        _input: &Path,
        _output: &Path,
        _components: &[ComponentEntry],
        _models: &ModelRegistry,
    ) -> Result<ReconcileReport, NetlistError> {
        Ok(ReconcileReport::default())
    }
}
