use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spicebench_netlist::NoReconciler;
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct ComponentArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Component name (e.g. R1)
    pub name: String,

    /// Component value
    pub value: String,

    /// Connection nodes, comma separated (e.g. in,out)
    #[arg(long, required = true, value_delimiter = ',')]
    pub nodes: Vec<String>,
}

pub fn execute(args: ComponentArgs) -> Result<()> {
    let mut session = Session::new(&args.netlist);
    let (outcome, _report) =
        session.set_component(&args.name, &args.nodes, &args.value, &mut NoReconciler)?;
    crate::report_edit(&format!("component {}", args.name), outcome);
    Ok(())
}
