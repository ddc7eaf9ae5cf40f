use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct DcArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Name of the swept source
    pub source: String,

    /// Sweep start value
    #[arg(allow_negative_numbers = true)]
    pub start: f64,

    /// Sweep stop value
    #[arg(allow_negative_numbers = true)]
    pub stop: f64,

    /// Sweep increment
    #[arg(allow_negative_numbers = true)]
    pub step: f64,
}

pub fn execute(args: DcArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_dc(&args.source, args.start, args.stop, args.step)?;
    crate::report_edit(".DC analysis", outcome);
    Ok(())
}
