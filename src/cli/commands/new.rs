//! `odt new` command - create a scenario file

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::slugify;
use crate::model::scenario::Scenario;
use crate::yaml::write_scenario;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Scenario title
    #[arg(long, short = 't')]
    pub title: String,

    /// Author name
    #[arg(long, short = 'a', env = "ODT_AUTHOR", default_value = "unknown")]
    pub author: String,

    /// Output path (default: <slug-of-title>.odt.yaml)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: NewArgs) -> Result<()> {
    let scenario = Scenario::new(&args.title, &args.author);
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.odt.yaml", slugify(&args.title))));

    if path.exists() {
        miette::bail!("refusing to overwrite existing file {}", path.display());
    }

    write_scenario(&scenario, &path)?;

    println!(
        "{} Created scenario {} ({})",
        style("✓").green(),
        style(&scenario.title).bold(),
        path.display()
    );
    println!("  id: {}", scenario.id);
    println!("  1 component (normal defaults); edit the file or use `odt add`");
    Ok(())
}
