//! `odt add` command - append a component with a family's defaults

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::model::distribution::DistributionKind;
use crate::model::scenario::Scenario;
use crate::yaml::{parse_yaml_file, write_scenario};

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Scenario file to modify
    pub file: PathBuf,

    /// Distribution family (normal, uniform, exponential, dirac, linear)
    #[arg(long, short = 'k', default_value = "normal")]
    pub kind: DistributionKind,

    /// Component name (default: "Component N")
    #[arg(long, short = 'n')]
    pub name: Option<String>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let mut scenario: Scenario = parse_yaml_file(&args.file)?;

    let added = scenario.add_component(args.kind, args.name);
    let name = added.name.clone();

    write_scenario(&scenario, &args.file)?;

    println!(
        "{} Added {} component '{}' to {} ({} total)",
        style("✓").green(),
        args.kind,
        name,
        args.file.display(),
        scenario.component_count()
    );
    Ok(())
}
