//! Calendar heatmap rendering
//!
//! Draws one panel per calendar year: weeks run left to right, Monday at the
//! top. Cell colour follows a green scale from 0 to [`VMAX`] requests; busier
//! days saturate at the darkest shade.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// Counts at or above this get the darkest shade
pub const VMAX: u64 = 5;

const TITLE: &str = "Learning Activity";
const CELL: u32 = 12;
const STEP: u32 = 14;
const LEFT: u32 = 48;
const TOP: u32 = 40;
const PANEL_HEIGHT: u32 = 7 * STEP + 24;
const WIDTH: u32 = LEFT + 54 * STEP + 8;

/// Green scale indexed by clamped count
const SHADES: [&str; (VMAX + 1) as usize] = [
    "#f7fcf5", "#d3eecd", "#98d594", "#4bb062", "#157f3b", "#00441b",
];
const NO_DATA: &str = "#ececec";

/// Turns a day → count history into an image.
pub trait HeatmapRenderer: Send + Sync {
    /// MIME type of the rendered payload
    fn content_type(&self) -> &'static str;

    /// Render the full history
    fn render(&self, days: &BTreeMap<NaiveDate, u64>) -> Vec<u8>;
}

/// SVG heatmap renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgHeatmap;

impl SvgHeatmap {
    pub fn new() -> Self {
        Self
    }

    /// Fill colour for a day with `count` requests
    pub fn shade(count: u64) -> &'static str {
        SHADES[count.min(VMAX) as usize]
    }

    fn panel(out: &mut String, year: i32, top: u32, days: &BTreeMap<NaiveDate, u64>) {
        out.push_str(&format!(
            "<text x=\"4\" y=\"{}\" class=\"year\">{}</text>\n",
            top + 4 * STEP,
            year
        ));

        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return;
        };
        let offset = first.weekday().num_days_from_monday();

        for day in first.iter_days().take_while(|d| *d <= last) {
            let week = (day.ordinal0() + offset) / 7;
            let row = day.weekday().num_days_from_monday();
            let x = LEFT + week * STEP;
            let y = top + row * STEP;

            let (fill, label) = match days.get(&day) {
                Some(count) => (Self::shade(*count), format!("{}: {}", day, count)),
                None => (NO_DATA, day.to_string()),
            };
            out.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"><title>{}</title></rect>\n",
                x, y, CELL, CELL, fill, label
            ));
        }
    }
}

impl HeatmapRenderer for SvgHeatmap {
    fn content_type(&self) -> &'static str {
        "image/svg+xml"
    }

    fn render(&self, days: &BTreeMap<NaiveDate, u64>) -> Vec<u8> {
        let years: Vec<i32> = match (days.keys().next(), days.keys().next_back()) {
            (Some(first), Some(last)) => (first.year()..=last.year()).collect(),
            _ => Vec::new(),
        };
        let height = TOP + (years.len().max(1) as u32) * PANEL_HEIGHT;

        let mut out = String::with_capacity(512 + years.len() * 371 * 96);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            WIDTH, height, WIDTH, height
        ));
        out.push_str(
            "<style>text{font-family:sans-serif;fill:#333}.title{font-size:18px}.year{font-size:12px}</style>\n",
        );
        out.push_str(&format!(
            "<text x=\"{}\" y=\"24\" text-anchor=\"middle\" class=\"title\">{}</text>\n",
            WIDTH / 2,
            TITLE
        ));

        if years.is_empty() {
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">No activity recorded</text>\n",
                WIDTH / 2,
                TOP + PANEL_HEIGHT / 2
            ));
        }
        for (i, year) in years.iter().enumerate() {
            Self::panel(&mut out, *year, TOP + i as u32 * PANEL_HEIGHT, days);
        }

        out.push_str("</svg>\n");
        out.into_bytes()
    }
}
