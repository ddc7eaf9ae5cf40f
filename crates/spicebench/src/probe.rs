use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Nodes to record output for
    #[arg(required = true, num_args = 1..)]
    pub nodes: Vec<String>,
}

pub fn execute(args: ProbeArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_probe(&args.nodes)?;
    crate::report_edit(".PROBE list", outcome);
    Ok(())
}
