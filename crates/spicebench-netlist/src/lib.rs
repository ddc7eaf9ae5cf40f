//! Interactive editing of SPICE netlists.
//!
//! A netlist stays on disk as the single source of truth; this crate
//! rewrites simulator directives (`.DC`, `.AC`, `.TRAN`, `.PARAM`,
//! `.OPTIONS`, `.MODEL`, `.PROBE`, component lines) in place with an
//! at-most-one-edit-per-call policy: the first line of a directive's kind
//! is replaced, otherwise the canonical line is inserted directly before
//! the `.END` terminator.
//!
//! Every edit reports what it did through [`EditOutcome`] /
//! [`ValueUpdate`] instead of sentinel strings, and flushes atomically so
//! a crash cannot corrupt the netlist.

mod directive;
mod edit;
mod reconcile;
mod value;

pub use directive::{Directive, SweepKind};
pub use edit::{EditOutcome, Matcher, Netlist, NetlistError};
pub use reconcile::{
    ComponentEntry, ModelReconciler, ModelRegistry, NoReconciler, ReconcileReport,
};
pub use value::ValueUpdate;
