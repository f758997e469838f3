//! Engine property tests through the public library API

use odt::engine::{compute_scenario, density, evaluation_domain, sample_series};
use odt::model::distribution::{Component, Distribution, Point};
use odt::model::scenario::Scenario;
use odt::yaml::parse_yaml;

fn series_area(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let step = points[1].x - points[0].x;
    points.iter().map(|p| p.y * step).sum()
}

fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let variance = std_dev * std_dev;
    (1.0 / (2.0 * std::f64::consts::PI * variance).sqrt())
        * (-(x - mean).powi(2) / (2.0 * variance)).exp()
}

#[test]
fn test_every_family_integrates_to_unit_area() {
    let dists = [
        Distribution::Normal {
            mean: 50.0,
            std_dev: 10.0,
        },
        Distribution::Uniform {
            min: 0.0,
            max: 100.0,
        },
        Distribution::Exponential { lambda: 2.0 },
        Distribution::Linear {
            points: vec![
                Point::new(0.0, 0.5),
                Point::new(20.0, 2.0),
                Point::new(30.0, 0.0),
            ],
        },
    ];

    for dist in &dists {
        let dom = evaluation_domain(dist);
        let series = sample_series(dist, dom, 200);
        let area = series_area(&series);
        assert!(
            (area - 1.0).abs() < 0.01,
            "area {} for {:?}",
            area,
            dist.kind()
        );
    }
}

#[test]
fn test_sum_of_two_standard_normals_matches_closed_form() {
    let components = [
        Component::new(
            "A",
            Distribution::Normal {
                mean: 0.0,
                std_dev: 1.0,
            },
        ),
        Component::new(
            "B",
            Distribution::Normal {
                mean: 0.0,
                std_dev: 1.0,
            },
        ),
    ];
    let result = compute_scenario(&components).unwrap();

    // N(0,1) + N(0,1) = N(0, sqrt(2)); compare along the whole curve
    let sqrt2 = std::f64::consts::SQRT_2;
    for p in &result.convolution {
        let expected = normal_pdf(p.x, 0.0, sqrt2);
        assert!(
            (p.y - expected).abs() < 0.01,
            "at x={} got {} expected {}",
            p.x,
            p.y,
            expected
        );
    }
    assert!((series_area(&result.convolution) - 1.0).abs() < 1e-9);
}

#[test]
fn test_convolution_is_order_invariant() {
    let a = Component::new(
        "A",
        Distribution::Normal {
            mean: 10.0,
            std_dev: 2.0,
        },
    );
    let b = Component::new(
        "B",
        Distribution::Uniform {
            min: 0.0,
            max: 5.0,
        },
    );
    let c = Component::new("C", Distribution::Exponential { lambda: 1.0 });

    let abc = compute_scenario(&[a.clone(), b.clone(), c.clone()]).unwrap();
    let cba = compute_scenario(&[c, b, a]).unwrap();

    assert_eq!(abc.convolution.len(), cba.convolution.len());
    for (p, q) in abc.convolution.iter().zip(cba.convolution.iter()) {
        assert!((p.x - q.x).abs() < 1e-9);
        assert!((p.y - q.y).abs() < 1e-9, "at x={}: {} vs {}", p.x, p.y, q.y);
    }

    // Series order follows input order
    assert_eq!(abc.per_component[0].name, "A");
    assert_eq!(cba.per_component[0].name, "C");
}

#[test]
fn test_scenario_yaml_to_series_end_to_end() {
    let yaml = "\
id: SCN-0123456789ABCDEFGHJKMNPQRS
title: Two Stage Launch
created: 2024-06-01T12:00:00Z
author: analyst
components:
  - name: Stage Duration
    distribution:
      type: uniform
      min: 10.0
      max: 20.0
  - name: Prep Overhead
    distribution:
      type: dirac
      location: 5.0
";
    let scenario: Scenario = parse_yaml(yaml, "two-stage.odt.yaml").unwrap();
    let result = compute_scenario(&scenario.components).unwrap();

    // Uniform + point mass: rectangle shifted by the dirac location
    assert!(result.point_mass.is_none());
    let first_x = result.convolution.first().unwrap().x;
    assert!((first_x - 15.0).abs() < 1e-9);
    assert!((series_area(&result.convolution) - 1.0).abs() < 1e-9);

    // Mid-span density should be about 1/width = 0.1
    let mid = result
        .convolution
        .iter()
        .min_by(|p, q| {
            (p.x - 20.0).abs().partial_cmp(&(q.x - 20.0).abs()).unwrap()
        })
        .unwrap();
    assert!((mid.y - 0.1).abs() < 0.01, "mid density {}", mid.y);
}

#[test]
fn test_density_standalone_values() {
    assert!(
        (density(
            &Distribution::Normal {
                mean: 0.0,
                std_dev: 1.0
            },
            0.0
        ) - 0.3989422804)
            .abs()
            < 1e-9
    );
    assert_eq!(
        density(
            &Distribution::Uniform {
                min: 0.0,
                max: 10.0
            },
            5.0
        ),
        0.1
    );
    assert_eq!(density(&Distribution::Exponential { lambda: 2.0 }, 0.0), 2.0);
}

#[test]
fn test_recompute_is_stable() {
    let components = [
        Component::new(
            "A",
            Distribution::Linear {
                points: vec![
                    Point::new(0.0, 0.0),
                    Point::new(50.0, 1.0),
                    Point::new(100.0, 0.0),
                ],
            },
        ),
        Component::new("B", Distribution::Exponential { lambda: 0.25 }),
    ];
    let first = compute_scenario(&components).unwrap();
    let second = compute_scenario(&components).unwrap();
    assert_eq!(first, second);
}
