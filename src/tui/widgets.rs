use ratatui::prelude::*;

use crate::color::Color as BrandColor;
use crate::wizard::TOTAL_STEPS;

fn to_color(c: BrandColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: BrandColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

/// A row of colored swatches, one per hex string, each labelled with its
/// own value on the colored background. Unparseable entries are skipped.
pub fn swatch_row(colors: &[String]) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for hex in colors {
        let Ok(color) = BrandColor::from_hex(hex) else {
            continue;
        };
        spans.push(Span::styled(
            format!(" {} ", color.to_hex()),
            Style::default().bg(to_color(color)).fg(contrast_fg(color)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Step progress: `Step 3 of 8  ███████░░░░░░░░░░░` plus a percentage.
pub fn progress_line(current: usize, total: usize) -> Line<'static> {
    const BAR_WIDTH: usize = 2 * TOTAL_STEPS;
    let filled = (current * BAR_WIDTH) / total;
    let percent = (current * 100) / total;
    Line::from(vec![
        Span::styled(
            format!("Step {current} of {total}  "),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("  {percent}%"), Style::default().fg(Color::Gray)),
    ])
}

/// Fake browser chrome above the preview page: window dots plus a title.
pub fn chrome_bar(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(title.to_string(), Style::default().fg(Color::Gray)),
    ])
}
