use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct ParamArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Parameter name
    pub name: String,

    /// Parameter value
    pub value: String,
}

pub fn execute(args: ParamArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_param(&args.name, &args.value)?;
    crate::report_edit(&format!(".PARAM {}", args.name), outcome);
    Ok(())
}
