use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, error};
use spicebench_command_runner::CommandRunner;
use spicebench_netlist::{
    ComponentEntry, Directive, EditOutcome, ModelReconciler, ModelRegistry, Netlist,
    ReconcileReport, SweepKind, ValueUpdate,
};

use crate::ngspice::check_ngspice_installed;
use crate::raw::RawReader;

/// Fixed name of the file capturing ngspice console output.
pub const LOG_FILE_NAME: &str = "spicebench.log";

/// Where ngspice console output goes during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// Tee console output into `spicebench.log` next to the netlist.
    #[default]
    File,
    /// Let console output pass through to the terminal.
    Passthrough,
}

/// How a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RunStatus {
    /// ngspice produced the output artifact.
    Complete,
    /// ngspice exited without producing the artifact; previous results
    /// are left untouched.
    NoArtifact,
}

/// Waveform data from the most recent successful run: the independent
/// sweep (time or frequency) plus named signals, keyed by variable name
/// lowercased and trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimResults {
    sweep: Vec<f64>,
    signals: HashMap<String, Vec<f64>>,
}

impl SimResults {
    pub fn sweep(&self) -> &[f64] {
        &self.sweep
    }

    /// Look up a signal; the name is normalized the same way keys are.
    pub fn signal(&self, name: &str) -> Option<&[f64]> {
        self.signals
            .get(&name.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn signal_names(&self) -> impl Iterator<Item = &str> {
        self.signals.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.sweep.is_empty() && self.signals.is_empty()
    }
}

/// Output artifact path for a netlist: the full file name plus `.raw`.
pub fn raw_artifact_path(netlist: &Path) -> PathBuf {
    let mut name = netlist.as_os_str().to_owned();
    name.push(".raw");
    PathBuf::from(name)
}

/// An interactive simulation session around one netlist.
///
/// Owns the in-memory mirrors (model registry, component list) and the
/// results of the last successful run. The netlist file itself remains
/// the source of truth; the mirrors are rebuilt by the reconciliation
/// collaborator after structural edits.
#[derive(Debug)]
pub struct Session {
    netlist: Netlist,
    pub models: ModelRegistry,
    pub components: Vec<ComponentEntry>,
    results: SimResults,
}

impl Session {
    pub fn new(netlist: impl Into<PathBuf>) -> Self {
        Self {
            netlist: Netlist::new(netlist),
            models: ModelRegistry::new(),
            components: Vec::new(),
            results: SimResults::default(),
        }
    }

    pub fn netlist(&self) -> &Netlist {
        &self.netlist
    }

    /// Read back the whole netlist as one string.
    pub fn netlist_text(&self) -> Result<String> {
        Ok(self.netlist.text()?)
    }

    pub fn results(&self) -> &SimResults {
        &self.results
    }

    /// Path of the log file runs write in [`LogMode::File`].
    pub fn log_path(&self) -> PathBuf {
        self.netlist.path().with_file_name(LOG_FILE_NAME)
    }

    pub fn set_dc(&self, source: &str, start: f64, stop: f64, step: f64) -> Result<EditOutcome> {
        Ok(self.netlist.apply(&Directive::dc(source, start, stop, step))?)
    }

    pub fn set_ac(
        &self,
        sweep: SweepKind,
        points: u32,
        fstart: f64,
        fstop: f64,
    ) -> Result<EditOutcome> {
        Ok(self
            .netlist
            .apply(&Directive::ac(sweep, points, fstart, fstop)?)?)
    }

    pub fn set_tran(
        &self,
        step: &str,
        stop: &str,
        start: Option<&str>,
        max_step: Option<&str>,
        uic: bool,
    ) -> Result<EditOutcome> {
        Ok(self
            .netlist
            .apply(&Directive::tran(step, stop, start, max_step, uic))?)
    }

    pub fn set_param(&self, name: &str, value: &str) -> Result<EditOutcome> {
        Ok(self.netlist.apply(&Directive::param(name, value))?)
    }

    pub fn set_option(&self, name: &str, value: &str) -> Result<EditOutcome> {
        Ok(self.netlist.apply(&Directive::option(name, value))?)
    }

    pub fn set_model(&self, name: &str, params: &str) -> Result<EditOutcome> {
        Ok(self.netlist.apply(&Directive::model(name, params))?)
    }

    pub fn set_probe(&self, nodes: &[String]) -> Result<EditOutcome> {
        Ok(self.netlist.apply(&Directive::probe(nodes.iter().cloned()))?)
    }

    pub fn set_component(
        &mut self,
        name: &str,
        nodes: &[String],
        value: &str,
        reconciler: &mut dyn ModelReconciler,
    ) -> Result<(EditOutcome, ReconcileReport)> {
        Ok(self
            .netlist
            .set_component(name, nodes, value, &self.components, &self.models, reconciler)?)
    }

    pub fn set_value(
        &mut self,
        name: &str,
        value: &str,
        reconciler: &mut dyn ModelReconciler,
    ) -> Result<ValueUpdate> {
        Ok(self
            .netlist
            .set_value(name, value, &self.components, &mut self.models, reconciler)?)
    }

    /// Run ngspice in batch mode against the netlist.
    ///
    /// Any stale artifact is removed first; afterwards the artifact's
    /// presence — not the exit status — decides whether the run worked.
    pub fn invoke(&self, log: LogMode) -> Result<RunStatus> {
        let raw = raw_artifact_path(self.netlist.path());
        match fs::remove_file(&raw) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to remove stale artifact {}", raw.display())
                });
            }
        }

        let ngspice = check_ngspice_installed()?;
        let mut runner = CommandRunner::new(ngspice)
            .arg("-b")
            .arg("-a")
            .arg(self.netlist.path().to_string_lossy())
            .arg("-r")
            .arg(raw.to_string_lossy());

        match log {
            LogMode::File => {
                let log_path = self.log_path();
                let file = File::create(&log_path).with_context(|| {
                    format!("failed to create log file {}", log_path.display())
                })?;
                runner = runner.log_file(file);
            }
            LogMode::Passthrough => runner = runner.passthrough(true),
        }

        let output = runner.run().context("failed to execute ngspice")?;
        debug!("ngspice exited with code {:?}", output.exit_code);

        if !raw.exists() {
            error!(
                "simulation produced no output, check the netlist ({} not created)",
                raw.display()
            );
            return Ok(RunStatus::NoArtifact);
        }
        Ok(RunStatus::Complete)
    }

    /// Decode the artifact through `reader` and replace the stored
    /// results as a unit. On any error the previous results survive.
    pub fn load_results(&mut self, reader: &dyn RawReader) -> Result<()> {
        let raw = raw_artifact_path(self.netlist.path());
        let plots = reader
            .open(&raw)
            .with_context(|| format!("failed to read waveform data from {}", raw.display()))?;
        let plot = plots
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("waveform file {} contains no plots", raw.display()))?;

        let mut signals = HashMap::new();
        for vector in plot.vectors() {
            signals.insert(vector.name().trim().to_lowercase(), vector.data().to_vec());
        }
        self.results = SimResults {
            sweep: plot.scale().data().to_vec(),
            signals,
        };
        Ok(())
    }

    /// Simulate and, when the artifact shows up, load its first plot.
    pub fn run(&mut self, reader: &dyn RawReader, log: LogMode) -> Result<RunStatus> {
        let status = self.invoke(log)?;
        if status == RunStatus::Complete {
            self.load_results(reader)?;
        }
        Ok(status)
    }
}
