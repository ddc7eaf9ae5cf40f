use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Netlist file to print
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    print!("{}", session.netlist_text()?);
    Ok(())
}
