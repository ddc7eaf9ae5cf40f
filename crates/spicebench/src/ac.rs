use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_netlist::SweepKind;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct AcArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Start frequency in Hz
    pub fstart: f64,

    /// Stop frequency in Hz
    pub fstop: f64,

    /// Number of points per interval
    #[arg(short = 'n', long, default_value_t = 100)]
    pub points: u32,

    /// Frequency-axis division: dec, oct or lin
    #[arg(short, long, default_value = "dec")]
    pub sweep: SweepKind,
}

pub fn execute(args: AcArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_ac(args.sweep, args.points, args.fstart, args.fstop)?;
    crate::report_edit(".AC analysis", outcome);
    Ok(())
}
