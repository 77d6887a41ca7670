pub mod creative;
pub mod minimal;
pub mod professional;

use ratatui::prelude::*;

use crate::answers::{QuestionnaireAnswers, SocialLinks};
use crate::color::Color as BrandColor;
use crate::template::TemplateId;
use crate::wizard::Viewport;

pub use creative::CreativeTemplate;
pub use minimal::MinimalTemplate;
pub use professional::ProfessionalTemplate;

/// Fixed display colors used when the extractor has not filled a slot.
pub const DEFAULT_PRIMARY: BrandColor = BrandColor {
    r: 0x3b,
    g: 0x82,
    b: 0xf6,
};
pub const DEFAULT_SECONDARY: BrandColor = BrandColor {
    r: 0x10,
    g: 0xb9,
    b: 0x81,
};
pub const DEFAULT_ACCENT: BrandColor = BrandColor {
    r: 0xf5,
    g: 0x9e,
    b: 0x0b,
};

/// The three display colors every template renders with, derived from the
/// extracted brand colors in order: primary, secondary, accent.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: BrandColor,
    pub secondary: BrandColor,
    pub accent: BrandColor,
}

impl Theme {
    pub fn from_answers(answers: &QuestionnaireAnswers) -> Self {
        fn slot(colors: &[String], index: usize, default: BrandColor) -> BrandColor {
            colors
                .get(index)
                .and_then(|hex| BrandColor::from_hex(hex).ok())
                .unwrap_or(default)
        }
        Self {
            primary: slot(&answers.extracted_colors, 0, DEFAULT_PRIMARY),
            secondary: slot(&answers.extracted_colors, 1, DEFAULT_SECONDARY),
            accent: slot(&answers.extracted_colors, 2, DEFAULT_ACCENT),
        }
    }
}

/// One of the three static page structures. Implementations are pure
/// display variants over the same inputs; they differ only in structure
/// and placeholder content, never in logic.
pub trait Template {
    fn id(&self) -> TemplateId;

    /// Render the full page as styled terminal lines. Pure in its inputs;
    /// `year` feeds the copyright footer.
    fn render(
        &self,
        answers: &QuestionnaireAnswers,
        theme: &Theme,
        viewport: Viewport,
        year: i32,
    ) -> Vec<Line<'static>>;
}

pub fn template(id: TemplateId) -> &'static dyn Template {
    match id {
        TemplateId::Professional => &ProfessionalTemplate,
        TemplateId::Creative => &CreativeTemplate,
        TemplateId::Minimal => &MinimalTemplate,
    }
}

/// Render a page with the theme derived from the answers.
pub fn render_page(
    answers: &QuestionnaireAnswers,
    id: TemplateId,
    viewport: Viewport,
    year: i32,
) -> Vec<Line<'static>> {
    let theme = Theme::from_answers(answers);
    template(id).render(answers, &theme, viewport, year)
}

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

pub(crate) fn tui_color(c: BrandColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Substitute a template placeholder for an unfilled answer.
pub(crate) fn fallback(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// A short colored divider bar, as drawn under section headings.
pub(crate) fn rule(color: BrandColor, width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(tui_color(color)),
    ))
}

pub(crate) fn blank() -> Line<'static> {
    Line::from("")
}

pub(crate) fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Social platform links with a non-empty URL, in display order.
pub(crate) fn active_social_platforms(links: &SocialLinks) -> Vec<&'static str> {
    let mut platforms = Vec::new();
    if !links.facebook.is_empty() {
        platforms.push("Facebook");
    }
    if !links.instagram.is_empty() {
        platforms.push("Instagram");
    }
    if !links.twitter.is_empty() {
        platforms.push("Twitter");
    }
    if !links.linkedin.is_empty() {
        platforms.push("LinkedIn");
    }
    platforms
}

/// Icon row for the platforms with a URL. None when every URL is empty.
pub(crate) fn social_row(links: &SocialLinks, color: BrandColor) -> Option<Line<'static>> {
    let platforms = active_social_platforms(links);
    if platforms.is_empty() {
        return None;
    }
    let mut spans = Vec::new();
    for (i, name) in platforms.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{name}]"),
            Style::default().fg(tui_color(color)),
        ));
    }
    Some(Line::from(spans))
}

pub(crate) fn copyright(year: i32) -> String {
    format!("© {year} All Rights Reserved")
}

/// Nominal page width in columns, used for divider bars. Stays inside the
/// viewport's content width.
pub(crate) fn page_width(viewport: Viewport) -> usize {
    match viewport {
        Viewport::Desktop => 72,
        Viewport::Tablet => 64,
        Viewport::Mobile => 38,
    }
}

#[cfg(test)]
pub(crate) fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
