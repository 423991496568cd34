//! Field Formatters — small pure functions between the normalizer and the
//! section assembler: date ranges, bullet lists, the ability dot grid, and
//! language rows.

use chrono::NaiveDate;

use crate::latex::escape::escape;
use crate::latex::richtext::{has_items, normalize, ITEM_SENTINEL};
use crate::models::resume::{AbilityRow, LanguageRow};

/// Number of glyphs in an ability dot scale. Levels clamp to this.
pub const MAX_ABILITY_LEVEL: i16 = 6;

// ────────────────────────────────────────────────────────────────────────────
// Date ranges
// ────────────────────────────────────────────────────────────────────────────

/// The three distinguishable end states of a dated entry.
///
/// `Present` (the user ticked "ongoing") and `Unspecified` (the user left the
/// field empty) render differently and are never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    On(NaiveDate),
    Present,
    Unspecified,
}

/// Builds a [`RangeEnd`] from the stored column pair. The ongoing flag wins
/// over any leftover finish date.
pub fn range_end(finish: Option<NaiveDate>, is_ongoing: bool) -> RangeEnd {
    if is_ongoing {
        RangeEnd::Present
    } else {
        match finish {
            Some(d) => RangeEnd::On(d),
            None => RangeEnd::Unspecified,
        }
    }
}

/// Month-year display used everywhere a date appears ("Mar 2022").
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Formats a date range for a subheading. Empty when the start is absent,
/// regardless of the end state.
pub fn format_date_range(start: Option<NaiveDate>, end: &RangeEnd) -> String {
    let Some(start) = start else {
        return String::new();
    };
    let start = escape(&display_date(start));
    match end {
        RangeEnd::On(finish) => format!("{start} -- {}", escape(&display_date(*finish))),
        RangeEnd::Present => format!("{start} -- Present"),
        RangeEnd::Unspecified => start,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet lists
// ────────────────────────────────────────────────────────────────────────────

/// Renders a rich-text description as a `resumeItem` list, or as a single
/// plain paragraph when the text carries no list items at all.
///
/// A segment that is entirely one bold run (optionally trailing a colon) is
/// treated as a sub-heading: it closes the open list, emits the bold text as
/// an inset label line, and a fresh list opens for the items that follow.
pub fn format_bullets(description: Option<&str>) -> String {
    let Some(description) = description else {
        return String::new();
    };
    let normalized = normalize(description);
    if normalized.is_empty() {
        return String::new();
    }
    if !has_items(&normalized) {
        return format!("\\small{{{normalized}}}\n");
    }

    let mut out = String::new();
    let mut list_open = false;
    for segment in normalized.split(ITEM_SENTINEL) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if is_bold_label(segment) {
            if list_open {
                out.push_str("\\resumeItemListEnd\n");
                list_open = false;
            }
            out.push_str(&format!("\\small{{{segment}}} \\\\\n"));
        } else {
            if !list_open {
                out.push_str("\\resumeItemListStart\n");
                list_open = true;
            }
            out.push_str(&format!("\\resumeItem{{{segment}}}\n"));
        }
    }
    if list_open {
        out.push_str("\\resumeItemListEnd\n");
    }
    out
}

/// True if the segment is exactly one `\textbf{...}` run, allowing a trailing
/// colon. Escaped braces inside the run do not count toward nesting.
fn is_bold_label(segment: &str) -> bool {
    let Some(inner) = segment.strip_prefix("\\textbf{") else {
        return false;
    };
    let mut depth = 1usize;
    let mut escaped = false;
    for (i, c) in inner.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let tail = inner[i + 1..].trim();
                    return tail.is_empty() || tail == ":";
                }
            }
            _ => {}
        }
    }
    false
}

// ────────────────────────────────────────────────────────────────────────────
// Abilities & languages
// ────────────────────────────────────────────────────────────────────────────

/// Lays abilities out two per row, bold title right-aligned against a
/// six-dot proficiency scale.
pub fn format_abilities(abilities: &[AbilityRow]) -> String {
    if abilities.is_empty() {
        return String::new();
    }
    let mut out = String::from(
        "\\begin{tabular*}{\\textwidth}[t]{l@{\\extracolsep{\\fill}}r@{\\hspace{18pt}}l@{\\extracolsep{\\fill}}r}\n",
    );
    for pair in abilities.chunks(2) {
        let left = format!("\\textbf{{{}}} & {}", escape(&pair[0].title), dot_scale(pair[0].level));
        let right = match pair.get(1) {
            Some(a) => format!("\\textbf{{{}}} & {}", escape(&a.title), dot_scale(a.level)),
            None => " & ".to_string(),
        };
        out.push_str(&format!("{left} & {right} \\\\\n"));
    }
    out.push_str("\\end{tabular*}\n");
    out
}

/// Six dot glyphs, the first `level` filled. Out-of-range input clamps
/// instead of over- or under-running the scale.
fn dot_scale(level: i16) -> String {
    let filled = level.clamp(0, MAX_ABILITY_LEVEL) as usize;
    let mut dots = String::from("$");
    for _ in 0..filled {
        dots.push_str("\\bullet");
    }
    for _ in filled..MAX_ABILITY_LEVEL as usize {
        dots.push_str("\\circ");
    }
    dots.push('$');
    dots
}

/// One row per language: bold name, rule glyph, italic CEFR level.
pub fn format_languages(languages: &[LanguageRow]) -> String {
    let mut out = String::new();
    for lang in languages {
        out.push_str(&format!(
            "\\textbf{{{}}} $|$ \\textit{{{}}} \\\\\n",
            escape(&lang.language),
            escape(&lang.level)
        ));
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
