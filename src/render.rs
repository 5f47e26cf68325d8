//! Renders the grid as a "3D" block SVG.
//!
//! Each active day becomes a raised block drawn as two rectangles sharing a
//! color: a thin top face and a front face whose height encodes the count.
//! Rendering is a pure function over the grid and cannot fail.

use crate::layout::{Grid, DAYS_PER_WEEK, WEEKS};

/// Side length of a block face, in pixels.
const BLOCK_WIDTH: i32 = 12;

/// Horizontal gap between week columns.
const BLOCK_GAP: i32 = 4;

/// Vertical distance between day rows.
const ROW_PITCH: i32 = BLOCK_WIDTH + 2;

/// Thickness of the top face.
const TOP_THICKNESS: i32 = BLOCK_WIDTH / 3;

/// Canvas width, derived from the week count and block geometry.
const CANVAS_WIDTH: i32 = (BLOCK_WIDTH + BLOCK_GAP) * WEEKS as i32 + 40;

/// Canvas height, enough headroom for the tallest block.
const CANVAS_HEIGHT: i32 = 200;

/// Fixed document written when the pipeline fails, so an embedding profile
/// never shows a broken image.
pub const FALLBACK_SVG: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="60">"#,
    r##"<rect width="100%" height="100%" fill="#0b1220"/>"##,
    r##"<text x="10" y="35" font-size="12" fill="#9aa6b2">Calendar temporarily unavailable</text>"##,
    r#"</svg>"#,
);

/// Front-face height in pixels for a day's contribution count.
pub fn count_to_height(count: u32) -> i32 {
    match count {
        0 => 0,
        1 => 6,
        2..=3 => 10,
        4..=6 => 16,
        7..=12 => 24,
        _ => 32,
    }
}

/// Fill color for a day's contribution count (solid green palette).
///
/// The zero bucket is part of the upstream palette but the renderer skips
/// zero-height blocks before looking a color up, so it never appears in
/// output. Kept to match the documented source behavior.
pub fn count_to_color(count: u32) -> &'static str {
    match count {
        0 => "#ebedf0",
        1 => "#9be9a8",
        2..=3 => "#40c463",
        4..=6 => "#30a14e",
        _ => "#216e39",
    }
}

/// Assemble the full SVG document for a grid.
pub fn render_svg(grid: &Grid) -> String {
    let mut svg = Vec::new();
    svg.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    svg.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    ));
    svg.push(r#"<rect width="100%" height="100%" fill="transparent"/>"#.to_string());
    svg.push(r#"<g transform="translate(20,40)">"#.to_string());

    for week in 0..WEEKS {
        for day in 0..DAYS_PER_WEEK {
            let Some(record) = grid.cell(week, day) else {
                continue;
            };
            let height = count_to_height(record.count);
            if height == 0 {
                // Zero-activity days draw nothing at all
                continue;
            }
            let color = count_to_color(record.count);

            let x = week as i32 * (BLOCK_WIDTH + BLOCK_GAP);
            let baseline = day as i32 * ROW_PITCH;
            let front_y = baseline - height;

            // Top face sits directly above the front face's top edge
            svg.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="2" ry="2" />"#,
                x,
                front_y - TOP_THICKNESS,
                BLOCK_WIDTH,
                TOP_THICKNESS,
                color,
            ));
            svg.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="2" ry="2" />"#,
                x, front_y, BLOCK_WIDTH, height, color,
            ));
        }
    }

    svg.push("</g>".to_string());
    svg.push("</svg>".to_string());
    svg.join("\n")
}
