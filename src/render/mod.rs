//! Rendering of calorie reports.
//!
//! [`Rendered`] is a pure description of the intended UI state; writing it
//! to a terminal (or reading it back for the clipboard) is a separate step.

use crate::encode::DataUrl;
use crate::types::CalorieReport;
use std::io;

/// Keyword table for the exercise glyph, first match wins.
const EXERCISE_GLYPHS: &[(&[&str], &str)] = &[
    (&["달리기", "run"], "🏃"),
    (&["걷기", "walk"], "🚶"),
    (&["등산", "hiking", "mountain"], "🥾"),
    (&["자전거", "cycle", "bike"], "🚴"),
    (&["수영", "swim"], "🏊"),
    (&["줄넘기", "jump"], "🤸"),
    (&["요가", "yoga"], "🧘"),
    (&["스쿼트", "squat"], "🏋️"),
    (&["계단", "stair"], "🪜"),
];

/// Prefixes the exercise text with a matching glyph.
///
/// Case-insensitive substring match against Korean and English synonyms;
/// 💪 when nothing matches. Empty input stays empty.
pub fn decorate_exercise(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let glyph = EXERCISE_GLYPHS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or("💪", |(_, glyph)| *glyph);

    format!("{glyph} {text}")
}

/// A rendered result: the lines and items a UI should display.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Food name line.
    pub food: String,
    /// Calorie line, `"{calorie} kcal"`.
    pub calorie: String,
    /// Calculation bullets, order preserved.
    pub detail: Vec<String>,
    /// Exercise line, `"운동량: {decorated}"`.
    pub exercise: String,
    /// Thumbnail of the analyzed photo; `None` hides it.
    pub thumbnail: Option<DataUrl>,
}

impl Rendered {
    /// Render a report, optionally alongside the photo it came from.
    pub fn from_report(report: &CalorieReport, thumbnail: Option<DataUrl>) -> Self {
        Self {
            food: report.food.clone(),
            calorie: format!("{} kcal", report.calorie),
            detail: report.detail.clone(),
            exercise: format!("운동량: {}", decorate_exercise(&report.exercise)),
            thumbnail,
        }
    }

    /// The placeholder shown while a request is in flight.
    pub fn analyzing(thumbnail: Option<DataUrl>) -> Self {
        Self {
            food: "분석 중...".to_string(),
            calorie: String::new(),
            detail: Vec::new(),
            exercise: String::new(),
            thumbnail,
        }
    }

    /// Plain-text form for the clipboard: food, calorie line, each detail
    /// bullet prefixed `- `, exercise line, newline-joined.
    pub fn clipboard_text(&self) -> String {
        let detail = self
            .detail
            .iter()
            .map(|d| format!("- {d}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n{}\n{}\n{}", self.food, self.calorie, detail, self.exercise)
    }

    /// Write the rendered state to a terminal-style writer.
    pub fn write_to<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{}", self.food)?;
        if !self.calorie.is_empty() {
            writeln!(w, "{}", self.calorie)?;
        }
        for item in &self.detail {
            writeln!(w, "  - {item}")?;
        }
        if !self.exercise.is_empty() {
            writeln!(w, "{}", self.exercise)?;
        }
        if let Some(thumbnail) = &self.thumbnail {
            // Data-URL stand-in for the page thumbnail.
            writeln!(
                w,
                "🖼  {} ({} KB base64)",
                thumbnail.mime_type(),
                thumbnail.payload().len() / 1024
            )?;
        }
        Ok(())
    }
}
