//! `odt rm` command - remove a component by index

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::model::scenario::Scenario;
use crate::yaml::{parse_yaml_file, write_scenario};

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Scenario file to modify
    pub file: PathBuf,

    /// Zero-based component index
    pub index: usize,
}

pub fn run(args: RemoveArgs) -> Result<()> {
    let mut scenario: Scenario = parse_yaml_file(&args.file)?;

    let Some(removed) = scenario.remove_component(args.index) else {
        miette::bail!(
            "no component at index {} ({} component(s) in scenario)",
            args.index,
            scenario.component_count()
        );
    };

    write_scenario(&scenario, &args.file)?;

    println!(
        "{} Removed component '{}' from {} ({} remaining)",
        style("✓").green(),
        removed.name,
        args.file.display(),
        scenario.component_count()
    );
    Ok(())
}
