//! ngspice invocation and result loading.
//!
//! The netlist is simulated with `ngspice -b` as a blocking subprocess;
//! success is observed through the presence of the `<netlist>.raw`
//! artifact, which an injected [`RawReader`] then decodes into the
//! session's result arrays.

mod ngspice;
mod raw;
mod session;

pub use ngspice::{check_ngspice_installed, ngspice_path};
pub use raw::{RawPlot, RawReader, RawVector};
pub use session::{
    LOG_FILE_NAME, LogMode, RunStatus, Session, SimResults, raw_artifact_path,
};
