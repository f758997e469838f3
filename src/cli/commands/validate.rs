//! `odt validate` command - check scenario files

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::engine::validate_component;
use crate::model::scenario::Scenario;
use crate::yaml::parse_yaml_file;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Scenario files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show summary only, don't show individual errors
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let mut passed = 0usize;
    let mut failed = 0usize;

    for path in &args.files {
        let scenario: Scenario = match parse_yaml_file(path) {
            Ok(s) => s,
            Err(err) => {
                failed += 1;
                println!("{} {}", style("✗").red(), path.display());
                if !args.summary {
                    eprintln!("{:?}", miette::Report::new(err));
                }
                continue;
            }
        };

        let errors: Vec<_> = scenario
            .components
            .iter()
            .filter_map(|c| validate_component(c).err())
            .collect();

        if errors.is_empty() {
            passed += 1;
            println!(
                "{} {} ({} component(s))",
                style("✓").green(),
                path.display(),
                scenario.component_count()
            );
        } else {
            failed += 1;
            println!(
                "{} {} ({} error(s))",
                style("✗").red(),
                path.display(),
                errors.len()
            );
            if !args.summary {
                for err in errors {
                    eprintln!("{:?}", miette::Report::new(err));
                }
            }
        }
    }

    println!();
    println!(
        "{} file(s) checked: {} passed, {} failed",
        passed + failed,
        passed,
        failed
    );

    if failed > 0 {
        miette::bail!("validation failed for {failed} file(s)");
    }
    Ok(())
}
