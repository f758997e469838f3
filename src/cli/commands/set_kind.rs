//! `odt set-kind` command - switch a component's distribution family
//!
//! Switching discards the prior parameters and reinitializes to the new
//! family's defaults; no field carry-over is attempted.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::model::distribution::DistributionKind;
use crate::model::scenario::Scenario;
use crate::yaml::{parse_yaml_file, write_scenario};

#[derive(clap::Args, Debug)]
pub struct SetKindArgs {
    /// Scenario file to modify
    pub file: PathBuf,

    /// Zero-based component index
    pub index: usize,

    /// New distribution family
    pub kind: DistributionKind,
}

pub fn run(args: SetKindArgs) -> Result<()> {
    let mut scenario: Scenario = parse_yaml_file(&args.file)?;

    let count = scenario.component_count();
    let Some(component) = scenario.components.get_mut(args.index) else {
        miette::bail!(
            "no component at index {} ({} component(s) in scenario)",
            args.index,
            count
        );
    };

    let previous = component.distribution.kind();
    component.set_kind(args.kind);
    let name = component.name.clone();

    write_scenario(&scenario, &args.file)?;

    println!(
        "{} Component '{}' switched {} -> {} (defaults applied)",
        style("✓").green(),
        name,
        previous,
        args.kind
    );
    Ok(())
}
