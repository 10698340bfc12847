//! Plain-text rendering of search results and food details.
//!
//! Colours come from a single zone lookup table ([`ZoneColor::for_zone`]);
//! nothing else in the crate knows about colours.

use crate::classify::{GaugeScale, GlBand};
use crate::detail::FoodDetail;
use crate::model::Zone;
use crate::search::SearchOutcome;

/// Number of character cells used for the gauge bar.
pub const GAUGE_WIDTH: usize = 30;

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

const RESET: &str = "\x1b[0m";

const EXPLANATIONS: [(&str, &str); 3] = [
    (
        "Glycemic Index (GI)",
        "Measures how quickly a food raises blood sugar.",
    ),
    (
        "Glycemic Load (GL)",
        "Considers both the quality (GI) and quantity of carbs.",
    ),
    (
        "GL Zone",
        "Categorizes food as Low (0-10), Medium (10-20), or High (20-30).",
    ),
];

/// Display colour of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl ZoneColor {
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Low => ZoneColor::Green,
            Zone::Medium => ZoneColor::Yellow,
            Zone::High => ZoneColor::Red,
            Zone::Unknown => ZoneColor::Gray,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ZoneColor::Green => "green",
            ZoneColor::Yellow => "yellow",
            ZoneColor::Red => "red",
            ZoneColor::Gray => "gray",
        }
    }

    /// ANSI foreground escape sequence.
    pub fn ansi(self) -> &'static str {
        match self {
            ZoneColor::Green => "\x1b[32m",
            ZoneColor::Yellow => "\x1b[33m",
            ZoneColor::Red => "\x1b[31m",
            ZoneColor::Gray => "\x1b[90m",
        }
    }

    fn paint(self, text: &str, colored: bool) -> String {
        if colored {
            format!("{}{}{}", self.ansi(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Renders a results table, one row per record, tinted by zone.
pub fn render_results(outcome: &SearchOutcome<'_>, colored: bool) -> String {
    let records = match outcome {
        SearchOutcome::Matches(records) => records,
        SearchOutcome::NoResults => {
            return format!("{}\n", ZoneColor::Gray.paint(NO_RESULTS_MESSAGE, colored));
        }
    };

    let name_width = records
        .iter()
        .map(|r| r.display_name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Food".len());

    let header = format!(
        "{:<name_width$}  {:>6}  {:>6}  {}",
        "Food", "GI", "GL", "GL Rating"
    );
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for record in records {
        let row = format!(
            "{:<name_width$}  {:>6}  {:>6}  {}",
            record.display_name(),
            format_number(record.gi),
            format_number(record.gl),
            record.gl_rating.as_deref().map(str::trim).unwrap_or(""),
        );
        out.push_str(&ZoneColor::for_zone(record.zone()).paint(&row, colored));
        out.push('\n');
    }

    out
}

/// Renders the detail card for one food, including the gauge.
pub fn render_detail(detail: &FoodDetail, colored: bool) -> String {
    let title = detail.display_name();
    let zone_color = ZoneColor::for_zone(detail.zone);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count().max(1)));
    out.push_str("\n\n");

    out.push_str(&format!("Glycemic Index (GI): {}\n", format_number(detail.gi)));
    out.push_str(&format!("Glycemic Load (GL):  {}\n", format_number(detail.gl)));
    out.push_str(&format!(
        "GL Zone:             {}\n",
        zone_color.paint(detail.zone.label(), colored)
    ));

    out.push_str("\nWhat the numbers mean:\n");
    for (term, explanation) in EXPLANATIONS {
        out.push_str(&format!("  {term}: {explanation}\n"));
    }

    out.push('\n');
    out.push_str(&render_gauge(detail.gl, detail.scale, colored));
    out
}

/// Renders a segmented horizontal bar with a marker at `gl_value`.
///
/// The marker is labelled with the value rounded to a whole number, halves
/// going to the even neighbour; its position is clamped to the scale.
pub fn render_gauge(gl_value: f64, scale: GaugeScale, colored: bool) -> String {
    let marker = (scale.position(gl_value) * GAUGE_WIDTH as f64).round() as usize;
    let span = scale.max - scale.min;

    let mut label_line = String::new();
    place(&mut label_line, marker, &format!("{:.0}", gl_value.round_ties_even()));

    let mut tick_line = String::new();
    place(&mut tick_line, marker, "v");

    let mut bar = String::new();
    for cell in 0..GAUGE_WIDTH {
        let value = scale.min + (cell as f64 + 0.5) / GAUGE_WIDTH as f64 * span;
        let band = GlBand::at(value);
        bar.push_str(&band_cell(band, colored));
    }

    let mut scale_line = String::new();
    for step in 0..=3 {
        let column = GAUGE_WIDTH * step / 3;
        let value = scale.min + span * step as f64 / 3.0;
        place(&mut scale_line, column, &format_number(value.round()));
    }

    format!("{label_line}\n{tick_line}\n{bar}\n{scale_line}\n")
}

fn band_cell(band: GlBand, colored: bool) -> String {
    let color = ZoneColor::for_zone(band.zone());
    if colored {
        color.paint("█", true)
    } else {
        match band {
            GlBand::Low => "░",
            GlBand::Medium => "▒",
            GlBand::High => "▓",
        }
        .to_string()
    }
}

/// Writes `text` starting at `column`, keeping at least one space after
/// whatever is already on the line.
fn place(line: &mut String, column: usize, text: &str) {
    let used = line.chars().count();
    if used < column {
        line.push_str(&" ".repeat(column - used));
    } else if used > 0 {
        line.push(' ');
    }
    line.push_str(text);
}

/// Formats a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
