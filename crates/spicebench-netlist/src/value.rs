use crate::directive::Directive;
use crate::edit::{EditOutcome, Matcher, Netlist, NetlistError};
use crate::reconcile::{ComponentEntry, ModelReconciler, ModelRegistry, ReconcileReport};

/// Result of a component value update.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ValueUpdate {
    /// The trailing value field was rewritten.
    Applied {
        old_value: String,
        report: ReconcileReport,
    },
    /// The component already carries the requested value; nothing written.
    Unchanged,
    /// No line in the netlist mentions the component.
    NotFound,
}

impl Netlist {
    /// Replace the trailing value field of the first line mentioning
    /// `component`.
    ///
    /// When the old value referenced a model, the model's `.INCLUDE` line
    /// is blanked to a `*` comment and the registry entry dropped, then
    /// model reconciliation re-runs.
    pub fn set_value(
        &self,
        component: &str,
        value: &str,
        components: &[ComponentEntry],
        models: &mut ModelRegistry,
        reconciler: &mut dyn ModelReconciler,
    ) -> Result<ValueUpdate, NetlistError> {
        let mut lines = self.load()?;
        let Some(idx) = lines.iter().position(|line| line.contains(component)) else {
            return Ok(ValueUpdate::NotFound);
        };

        let (old_value, new_line) = {
            let mut tokens: Vec<&str> = lines[idx].split_whitespace().collect();
            let Some(&old_value) = tokens.last() else {
                return Ok(ValueUpdate::NotFound);
            };
            if old_value == value {
                return Ok(ValueUpdate::Unchanged);
            }
            let last = tokens.len() - 1;
            tokens[last] = value;
            (old_value.to_owned(), tokens.join(" "))
        };

        lines[idx] = new_line;
        self.flush(&lines)?;

        // A value that referenced a model drags its .INCLUDE out with it;
        // the line is blanked to a comment rather than removed. A registry
        // miss just means the old value was a plain number or symbol.
        if let Some(model) = models.remove(&old_value) {
            let _ = self.find_and_replace(&Matcher::keyword_with_name("INCLUDE", &model), "*")?;
        }

        let report = reconciler.reconcile(self.path(), self.path(), components, models)?;
        Ok(ValueUpdate::Applied { old_value, report })
    }

    /// Declare or rewrite a component line, then re-run model
    /// reconciliation since the edit may change which models the netlist
    /// references.
    pub fn set_component(
        &self,
        name: &str,
        nodes: &[String],
        value: &str,
        components: &[ComponentEntry],
        models: &ModelRegistry,
        reconciler: &mut dyn ModelReconciler,
    ) -> Result<(EditOutcome, ReconcileReport), NetlistError> {
        let directive = Directive::component(name, nodes.iter().cloned(), value);
        let outcome = self.apply(&directive)?;
        let report = reconciler.reconcile(self.path(), self.path(), components, models)?;
        Ok((outcome, report))
    }
}
