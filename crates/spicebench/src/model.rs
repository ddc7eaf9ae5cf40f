use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Model name
    pub name: String,

    /// Model parameters, passed through verbatim
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub params: Vec<String>,
}

pub fn execute(args: ModelArgs) -> Result<()> {
    let session = Session::new(&args.netlist);
    let outcome = session.set_model(&args.name, &args.params.join(" "))?;
    crate::report_edit(&format!(".MODEL {}", args.name), outcome);
    Ok(())
}
