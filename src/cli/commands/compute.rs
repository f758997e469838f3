//! `odt compute` command - run the engine and export series

use miette::{IntoDiagnostic, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::cli::output::{series_to_yaml, write_series_rows, OutputFormat, SeriesSelection};
use crate::engine::compute_scenario;
use crate::model::scenario::Scenario;
use crate::yaml::parse_yaml_file;

#[derive(clap::Args, Debug)]
pub struct ComputeArgs {
    /// Scenario file to compute
    pub file: PathBuf,

    /// Export format
    #[arg(long, short = 'f', value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Which series to export
    #[arg(long, short = 's', value_enum, default_value = "all")]
    pub series: SeriesSelection,

    /// Output path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ComputeArgs) -> Result<()> {
    let scenario: Scenario = parse_yaml_file(&args.file)?;
    let result = compute_scenario(&scenario.components)?;

    let mut writer: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(std::fs::File::create(path).into_diagnostic()?),
        None => Box::new(std::io::stdout()),
    };

    match args.format {
        OutputFormat::Csv => {
            write_series_rows(&mut writer, &result, args.series, b',').into_diagnostic()?
        }
        OutputFormat::Tsv => {
            write_series_rows(&mut writer, &result, args.series, b'\t').into_diagnostic()?
        }
        OutputFormat::Yaml => {
            let yaml = series_to_yaml(&result, args.series).into_diagnostic()?;
            writer.write_all(yaml.as_bytes()).into_diagnostic()?;
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
