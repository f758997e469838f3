//! Series export formatting
//!
//! Computed series leave the toolkit as CSV/TSV rows (one per sample,
//! labeled with the series name) or as a YAML document mirroring the
//! engine's output shape.

use std::io::Write;

use clap::ValueEnum;

use crate::engine::scenario::ScenarioSeries;

/// Export format for computed series
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Yaml,
}

/// Which series to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum SeriesSelection {
    /// Only the convolution (sum-distribution) series
    Convolution,
    /// Only the per-component display series
    Components,
    /// Everything
    #[default]
    All,
}

/// Label used for the convolution series in flat row output
pub const CONVOLUTION_LABEL: &str = "convolution";

fn selected(result: &ScenarioSeries, selection: SeriesSelection) -> ScenarioSeries {
    match selection {
        SeriesSelection::All => result.clone(),
        SeriesSelection::Convolution => ScenarioSeries {
            per_component: Vec::new(),
            convolution: result.convolution.clone(),
            point_mass: result.point_mass,
        },
        SeriesSelection::Components => ScenarioSeries {
            per_component: result.per_component.clone(),
            convolution: Vec::new(),
            point_mass: None,
        },
    }
}

/// Write series as delimited rows: series label, x, y
pub fn write_series_rows<W: Write>(
    writer: W,
    result: &ScenarioSeries,
    selection: SeriesSelection,
    delimiter: u8,
) -> csv::Result<()> {
    let result = selected(result, selection);
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    out.write_record(["series", "x", "y"])?;
    for series in &result.per_component {
        for point in &series.points {
            out.write_record([
                series.name.clone(),
                point.x.to_string(),
                point.y.to_string(),
            ])?;
        }
    }
    for point in &result.convolution {
        out.write_record([
            CONVOLUTION_LABEL.to_string(),
            point.x.to_string(),
            point.y.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Render series as a YAML document
pub fn series_to_yaml(
    result: &ScenarioSeries,
    selection: SeriesSelection,
) -> Result<String, serde_yml::Error> {
    serde_yml::to_string(&selected(result, selection))
}
