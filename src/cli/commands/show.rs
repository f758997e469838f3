//! `odt show` command - scenario details, computed summary, optional chart

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{fmt_num, truncate_str};
use crate::cli::viz;
use crate::engine::{compute_scenario, evaluation_domain, point_mass};
use crate::model::distribution::Distribution;
use crate::model::scenario::Scenario;
use crate::yaml::parse_yaml_file;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Scenario file to show
    pub file: PathBuf,

    /// Render a braille chart of the densities and their convolution
    #[arg(long, short = 'p')]
    pub plot: bool,

    /// Chart width in braille pixels
    #[arg(long, default_value_t = viz::CHART_WIDTH)]
    pub width: u32,

    /// Chart height in braille pixels
    #[arg(long, default_value_t = viz::CHART_HEIGHT)]
    pub height: u32,
}

/// One-line parameter summary for a component
fn describe(dist: &Distribution) -> String {
    match dist {
        Distribution::Normal { mean, std_dev } => {
            format!("μ={} σ={}", fmt_num(*mean), fmt_num(*std_dev))
        }
        Distribution::Uniform { min, max } => {
            format!("min={} max={}", fmt_num(*min), fmt_num(*max))
        }
        Distribution::Exponential { lambda } => format!("λ={}", fmt_num(*lambda)),
        Distribution::Dirac { location } => format!("location={}", fmt_num(*location)),
        Distribution::Linear { points } => format!("{} control points", points.len()),
    }
}

pub fn run(args: ShowArgs) -> Result<()> {
    let scenario: Scenario = parse_yaml_file(&args.file)?;

    println!("{}", style(&scenario.title).bold());
    println!("  id:      {}", scenario.id);
    println!("  author:  {}", scenario.author);
    println!("  created: {}", scenario.created.format("%Y-%m-%d %H:%M"));
    if let Some(ref description) = scenario.description {
        println!("  {}", description);
    }
    println!();

    if scenario.components.is_empty() {
        println!("  (no components)");
        return Ok(());
    }

    println!(
        "  {:<3} {:<24} {:<12} {:<28} {}",
        "#", "NAME", "KIND", "PARAMETERS", "DOMAIN"
    );
    for (i, component) in scenario.components.iter().enumerate() {
        let dom = evaluation_domain(&component.distribution);
        let domain = if point_mass(&component.distribution).is_some() {
            format!("point mass at {}", fmt_num(dom.min))
        } else {
            format!("[{}, {}]", fmt_num(dom.min), fmt_num(dom.max))
        };
        println!(
            "  {:<3} {:<24} {:<12} {:<28} {}",
            i,
            truncate_str(&component.name, 24),
            component.distribution.kind().to_string(),
            describe(&component.distribution),
            domain
        );
    }

    let result = compute_scenario(&scenario.components)?;

    println!();
    if let Some(location) = result.point_mass {
        println!(
            "  {}: every component is a point mass; the sum is exactly {}",
            style("Sum").bold(),
            fmt_num(location)
        );
    } else if let (Some(first), Some(last)) =
        (result.convolution.first(), result.convolution.last())
    {
        let peak = result
            .convolution
            .iter()
            .fold((0.0_f64, 0.0_f64), |acc, p| {
                if p.y > acc.1 {
                    (p.x, p.y)
                } else {
                    acc
                }
            });
        println!(
            "  {}: {} samples over [{}, {}], peak density {} at x={}",
            style("Convolution").bold(),
            result.convolution.len(),
            fmt_num(first.x),
            fmt_num(last.x),
            fmt_num(peak.1),
            fmt_num(peak.0)
        );
    }

    if args.plot {
        println!();
        println!(
            "{}",
            viz::render_series_chart(&scenario.components, &result, args.width, args.height)
        );
    }

    Ok(())
}
