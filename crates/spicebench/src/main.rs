use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use spicebench_netlist::EditOutcome;

mod ac;
mod component;
mod dc;
mod model;
mod option;
mod param;
mod probe;
mod run;
mod show;
mod tran;
mod value;

#[derive(Parser)]
#[command(name = "spicebench")]
#[command(about = "Interactive ngspice netlist control", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the .DC sweep analysis
    Dc(dc::DcArgs),

    /// Set the .AC small-signal analysis
    Ac(ac::AcArgs),

    /// Set the .TRAN transient analysis
    Tran(tran::TranArgs),

    /// Set a .PARAM value
    Param(param::ParamArgs),

    /// Set an .OPTIONS value
    Option(option::OptionArgs),

    /// Define a .MODEL
    Model(model::ModelArgs),

    /// Set the .PROBE node list
    Probe(probe::ProbeArgs),

    /// Declare or rewrite a component line
    #[command(alias = "comp")]
    Component(component::ComponentArgs),

    /// Change a component's trailing value field
    Value(value::ValueArgs),

    /// Run ngspice against the netlist
    Run(run::RunArgs),

    /// Print the netlist
    Show(show::ShowArgs),
}

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug; RUST_LOG still wins.
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Dc(args) => dc::execute(args),
        Commands::Ac(args) => ac::execute(args),
        Commands::Tran(args) => tran::execute(args),
        Commands::Param(args) => param::execute(args),
        Commands::Option(args) => option::execute(args),
        Commands::Model(args) => model::execute(args),
        Commands::Probe(args) => probe::execute(args),
        Commands::Component(args) => component::execute(args),
        Commands::Value(args) => value::execute(args),
        Commands::Run(args) => run::execute(args),
        Commands::Show(args) => show::execute(args),
    }
}

/// One line of feedback per edit, mirroring what the editor did.
pub(crate) fn report_edit(what: &str, outcome: EditOutcome) {
    match outcome {
        EditOutcome::Replaced => println!("updated {what}"),
        EditOutcome::Inserted => println!("added {what}"),
        EditOutcome::Unchanged => println!("{what} already up to date"),
        EditOutcome::MissingEnd => eprintln!(
            "{} netlist has no .END directive; {what} was not added",
            "warning:".yellow()
        ),
    }
}
