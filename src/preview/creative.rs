use ratatui::prelude::*;

use crate::answers::QuestionnaireAnswers;
use crate::color::Color as BrandColor;
use crate::template::TemplateId;
use crate::wizard::Viewport;

use super::{
    blank, copyright, fallback, heading, page_width, rule, social_row, tui_color, Template, Theme,
};

// The fourth service badge keeps a fixed purple, outside the theme.
const SERVICE_PURPLE: BrandColor = BrandColor {
    r: 0x93,
    g: 0x33,
    b: 0xea,
};

/// Template 2: "Creative & Bold". Dark chrome, uppercase accent brand,
/// portfolio grid and a testimonial band on the primary color.
pub struct CreativeTemplate;

impl Template for CreativeTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render(
        &self,
        answers: &QuestionnaireAnswers,
        theme: &Theme,
        viewport: Viewport,
        year: i32,
    ) -> Vec<Line<'static>> {
        let primary = tui_color(theme.primary);
        let accent = tui_color(theme.accent);
        let brand = fallback(&answers.business_name, "CREATIVE STUDIO");
        let width = page_width(viewport);
        let mut lines = Vec::new();

        // Navigation
        let brand_span = Span::styled(
            brand.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        );
        if viewport.is_stacked() {
            lines.push(Line::from(brand_span).alignment(Alignment::Center));
        } else {
            lines.push(Line::from(vec![
                brand_span,
                Span::raw("      "),
                Span::styled("HOME   WORK   ABOUT   SERVICES", Style::default().fg(Color::Gray)),
                Span::raw("   "),
                Span::styled(" CONTACT ", Style::default().bg(accent).fg(Color::Black)),
            ]));
        }
        lines.push(rule(theme.accent, width));
        lines.push(blank());

        // Hero
        for word in ["CREATIVE.", "BOLD.", "UNIQUE."] {
            let span = Span::styled(
                word,
                Style::default().fg(primary).add_modifier(Modifier::BOLD),
            );
            let line = if viewport.is_stacked() {
                Line::from(span).alignment(Alignment::Center)
            } else {
                Line::from(span)
            };
            lines.push(line);
        }
        lines.push(rule(theme.accent, 32));
        lines.push(Line::from(fallback(
            &answers.mission_statement,
            "We create extraordinary designs that capture attention and deliver results.",
        )));
        lines.push(Line::from(Span::styled(
            " SEE OUR WORK ",
            Style::default().bg(accent).fg(Color::Black),
        )));
        lines.push(blank());

        // Featured work
        lines.push(heading("Featured Work"));
        lines.push(rule(theme.secondary, 20));
        for index in 1..=4 {
            let discipline = if index % 2 == 0 {
                "Web Development"
            } else {
                "Marketing"
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Project {index}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  Branding, Design, {discipline}")),
            ]));
        }
        lines.push(blank());

        // Services
        lines.push(heading("Our Services"));
        lines.push(rule(theme.secondary, 20));
        lines.push(Line::from(
            "We offer a range of creative services to help your business stand out.",
        ));
        let badge_colors = [theme.primary, theme.secondary, theme.accent, SERVICE_PURPLE];
        for (index, service) in ["Branding", "Web Design", "UX/UI", "Marketing"]
            .into_iter()
            .enumerate()
        {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", index + 1),
                    Style::default()
                        .bg(tui_color(badge_colors[index]))
                        .fg(Color::White),
                ),
                Span::styled(
                    format!(" {service}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " — professional {} services tailored to your business.",
                    service.to_lowercase()
                )),
            ]));
        }
        lines.push(blank());

        // Testimonial band
        lines.push(Line::from(Span::styled(
            " What Our Clients Say ",
            Style::default().bg(primary).fg(Color::White),
        )));
        lines.push(Line::from(format!(
            "\"Working with {} was an incredible experience. They delivered beyond \
             our expectations and helped transform our brand.\"",
            fallback(&answers.business_name, "this team")
        )));
        lines.push(Line::from(Span::styled(
            "Jane Smith, CEO of Acme Inc.",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(blank());

        // Contact
        lines.push(heading("Get in Touch"));
        lines.push(rule(theme.accent, 20));
        let email = fallback(&answers.contact_info.email, "studio@creative.com");
        let phone = fallback(&answers.contact_info.phone, "+1 (555) 987-6543");
        let address = fallback(
            &answers.contact_info.address,
            "456 Creative Ave, Design District, NY 10001",
        );
        if viewport.is_stacked() {
            lines.push(Line::from(email));
            lines.push(Line::from(phone));
        } else {
            lines.push(Line::from(format!("{email}   ·   {phone}")));
        }
        lines.push(Line::from(address));
        if let Some(row) = social_row(&answers.social_links, theme.accent) {
            lines.push(row);
        }
        lines.push(Line::from(Span::styled(
            " SEND MESSAGE ",
            Style::default().bg(accent).fg(Color::Black),
        )));
        lines.push(blank());

        // Footer
        lines.push(rule(theme.accent, width));
        let footer_brand = Span::styled(
            brand,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        );
        let footer_legal = Span::styled(
            "Privacy   Terms   Cookies",
            Style::default().fg(Color::DarkGray),
        );
        if viewport.is_stacked() {
            lines.push(Line::from(footer_brand).alignment(Alignment::Center));
            lines.push(Line::from(copyright(year)).alignment(Alignment::Center));
            lines.push(Line::from(footer_legal).alignment(Alignment::Center));
        } else {
            lines.push(Line::from(vec![
                footer_brand,
                Span::raw("      "),
                footer_legal,
            ]));
            lines.push(Line::from(copyright(year)));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::plain_text;

    fn render(answers: &QuestionnaireAnswers, viewport: Viewport) -> String {
        let theme = Theme::from_answers(answers);
        plain_text(&CreativeTemplate.render(answers, &theme, viewport, 2026))
    }

    #[test]
    fn empty_business_name_falls_back_to_creative_studio() {
        let answers = QuestionnaireAnswers::default();
        let theme = Theme::from_answers(&answers);
        let lines = CreativeTemplate.render(&answers, &theme, Viewport::Desktop, 2026);
        let nav = plain_text(&lines[..1]);
        assert_eq!(nav.matches("CREATIVE STUDIO").count(), 1);
    }

    #[test]
    fn testimonial_quotes_the_business_name() {
        let mut answers = QuestionnaireAnswers::default();
        answers.business_name = "Studio North".to_string();
        let text = render(&answers, Viewport::Desktop);
        assert!(text.contains("Working with Studio North was an incredible experience."));

        let empty = render(&QuestionnaireAnswers::default(), Viewport::Desktop);
        assert!(empty.contains("Working with this team was an incredible experience."));
    }

    #[test]
    fn mobile_hides_the_nav_link_row() {
        let answers = QuestionnaireAnswers::default();
        assert!(render(&answers, Viewport::Desktop).contains("HOME   WORK   ABOUT   SERVICES"));
        assert!(!render(&answers, Viewport::Mobile).contains("HOME   WORK"));
    }

    #[test]
    fn contact_fallbacks_are_studio_specific() {
        let text = render(&QuestionnaireAnswers::default(), Viewport::Desktop);
        assert!(text.contains("studio@creative.com"));
        assert!(text.contains("456 Creative Ave, Design District, NY 10001"));
    }
}
