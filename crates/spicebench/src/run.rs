use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use spicebench_sim::{LogMode, RunStatus, Session, raw_artifact_path};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Netlist file to simulate
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Print ngspice console output instead of writing the log file
    #[arg(long)]
    pub no_log: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let mode = if args.no_log {
        LogMode::Passthrough
    } else {
        LogMode::File
    };

    match session.invoke(mode)? {
        RunStatus::Complete => {
            println!(
                "{} simulation finished, waveforms in {}",
                "ok:".green(),
                raw_artifact_path(&args.netlist).display()
            );
            if !args.no_log {
                println!("ngspice output logged to {}", session.log_path().display());
            }
            Ok(())
        }
        RunStatus::NoArtifact => {
            anyhow::bail!(
                "simulation produced no output, check the netlist ({} not created)",
                raw_artifact_path(&args.netlist).display()
            )
        }
    }
}
