//! Packs a rounded bed and prints the result as an SVG document.
//!
//! ```text
//! cargo run --example pack_svg > bed.svg
//! RUST_LOG=debug cargo run --example pack_svg > bed.svg
//! ```

use plantfill::boundary::{BoundaryLoop, BoundarySegment, BoundarySource, LoopKind};
use plantfill::curves::Arc2;
use plantfill::packing::{PackConfig, Packer};
use plantfill::{extract, PackedLayout, Point2, Polygon, Tolerance};
use std::f64::consts::PI;
use std::fmt::Write;

fn bed() -> BoundarySource<f64> {
    let segments = vec![
        BoundarySegment::line(Point2::new(0.0, 0.0), Point2::new(30.0, 0.0)),
        BoundarySegment::line(Point2::new(30.0, 0.0), Point2::new(30.0, 12.0)),
        BoundarySegment::Arc(Arc2::new(Point2::new(15.0, 12.0), 15.0, 0.0, PI)),
        BoundarySegment::line(Point2::new(0.0, 12.0), Point2::new(0.0, 0.0)),
    ];
    BoundarySource::CompositeRegion {
        loops: vec![BoundaryLoop::new(LoopKind::External, segments)],
    }
}

fn to_svg(polygon: &Polygon<f64>, layout: &PackedLayout<f64>) -> String {
    let (min, max) = polygon
        .bounding_box()
        .unwrap_or((Point2::origin(), Point2::origin()));
    let margin = 1.0;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        min.x - margin,
        -max.y - margin,
        max.x - min.x + 2.0 * margin,
        max.y - min.y + 2.0 * margin
    );

    // Flip y so the drawing reads like the plan.
    let _ = writeln!(svg, r#"<g transform="scale(1,-1)">"#);

    let mut d = String::new();
    for (i, v) in polygon.vertices.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {:.3} {:.3} ", cmd, v.x, v.y);
    }
    d.push('Z');
    let _ = writeln!(
        svg,
        r#"<path d="{}" fill="none" stroke="black" stroke-width="0.1"/>"#,
        d
    );

    for (i, c) in layout.iter().enumerate() {
        let fill = if i == 0 { "#2e7d32" } else { "#81c784" };
        let _ = writeln!(
            svg,
            r##"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}" fill-opacity="0.6" stroke="#1b5e20" stroke-width="0.05"/>"##,
            c.center.x, c.center.y, c.radius, fill
        );
    }

    let _ = writeln!(svg, "</g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

fn main() {
    env_logger::init();

    let tol = Tolerance::default();
    let polygon = match extract(&bed(), &tol) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("extraction failed: {e}");
            std::process::exit(1);
        }
    };

    let outcome = Packer::new(PackConfig::default().with_tolerance(tol)).run(&polygon, &[3.0, 2.0, 1.0]);

    eprintln!(
        "{} circles in {} iterations, {:.1}% covered",
        outcome.layout.len(),
        outcome.iterations,
        100.0 * outcome.layout.coverage(&polygon)
    );
    for (radius, count) in outcome.layout.count_by_radius(&tol) {
        eprintln!("  r={radius}: {count}");
    }

    print!("{}", to_svg(&polygon, &outcome.layout));
}
