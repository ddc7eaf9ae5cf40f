use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct OptionArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Option name
    pub name: String,

    /// Option value
    pub value: String,
}

pub fn execute(args: OptionArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_option(&args.name, &args.value)?;
    crate::report_edit(&format!(".OPTIONS {}", args.name), outcome);
    Ok(())
}
