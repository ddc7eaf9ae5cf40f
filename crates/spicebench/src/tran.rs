use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct TranArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Output time step (e.g. 1u)
    pub step: String,

    /// Simulation stop time (e.g. 1m)
    pub stop: String,

    /// Output start time
    #[arg(long)]
    pub start: Option<String>,

    /// Maximum internal step size
    #[arg(long = "max")]
    pub max_step: Option<String>,

    /// Use initial conditions (UIC)
    #[arg(long)]
    pub uic: bool,
}

pub fn execute(args: TranArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_tran(
        &args.step,
        &args.stop,
        args.start.as_deref(),
        args.max_step.as_deref(),
        args.uic,
    )?;
    crate::report_edit(".TRAN analysis", outcome);
    Ok(())
}
