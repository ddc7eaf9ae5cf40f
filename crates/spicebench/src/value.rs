use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use spicebench_netlist::{NoReconciler, ValueUpdate};
use spicebench_sim::Session;

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Netlist file to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub netlist: PathBuf,

    /// Component name (e.g. R1)
    pub name: String,

    /// New value for the trailing value field
    pub value: String,
}

pub fn execute(args: ValueArgs) -> Result<()> {
    let mut session = Session::new(&args.netlist);
    match session.set_value(&args.name, &args.value, &mut NoReconciler)? {
        ValueUpdate::Applied { old_value, .. } => {
            println!("{}: {} -> {}", args.name, old_value, args.value);
        }
        ValueUpdate::Unchanged => {
            eprintln!("{}", format!("{} already has that value", args.name).dimmed());
        }
        ValueUpdate::NotFound => {
            eprintln!("{}", format!("{} not found in netlist", args.name).dimmed());
        }
    }
    Ok(())
}
