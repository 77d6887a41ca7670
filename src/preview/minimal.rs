use ratatui::prelude::*;

use crate::answers::QuestionnaireAnswers;
use crate::template::TemplateId;
use crate::wizard::Viewport;

use super::{
    blank, copyright, fallback, heading, page_width, rule, social_row, tui_color, Template, Theme,
};

/// Template 3: "Modern & Minimalist". Light typographic chrome, product
/// grid, newsletter band on the secondary color, store-hours card.
pub struct MinimalTemplate;

impl Template for MinimalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn render(
        &self,
        answers: &QuestionnaireAnswers,
        theme: &Theme,
        viewport: Viewport,
        year: i32,
    ) -> Vec<Line<'static>> {
        let primary = tui_color(theme.primary);
        let secondary = tui_color(theme.secondary);
        let brand = fallback(&answers.business_name, "minima.");
        let width = page_width(viewport);
        let mut lines = Vec::new();

        // Navigation
        let brand_span = Span::styled(brand.clone(), Style::default().fg(primary));
        if viewport.is_stacked() {
            lines.push(Line::from(brand_span).alignment(Alignment::Center));
        } else {
            lines.push(Line::from(vec![
                brand_span,
                Span::raw("      "),
                Span::styled(
                    "Home   Products   About   Blog",
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("   "),
                Span::styled(" Contact ", Style::default().bg(primary).fg(Color::White)),
            ]));
        }
        lines.push(rule(theme.primary, width));
        lines.push(blank());

        // Hero
        lines.push(heading("Minimal design."));
        lines.push(heading("Maximum impact."));
        lines.push(Line::from(fallback(
            &answers.mission_statement,
            "We create beautiful, minimalist designs that let your products speak \
             for themselves.",
        )));
        lines.push(Line::from(Span::styled(
            " Explore Collection ",
            Style::default().bg(primary).fg(Color::White),
        )));
        lines.push(blank());

        // Featured products
        lines.push(heading("Featured Products"));
        if viewport.is_stacked() {
            for index in 1..=6 {
                lines.push(Line::from(format!("Product {index}  $99.00")));
            }
        } else {
            for row in 0..2 {
                let entries: Vec<String> = (1..=3)
                    .map(|col| format!("Product {}  $99.00", row * 3 + col))
                    .collect();
                lines.push(Line::from(entries.join("      ")));
            }
        }
        lines.push(blank());

        // Newsletter band
        lines.push(Line::from(Span::styled(
            " Join Our Newsletter ",
            Style::default().bg(secondary).fg(Color::White),
        )));
        lines.push(Line::from(
            "Subscribe to get special offers, free giveaways, and product launches.",
        ));
        lines.push(Line::from(Span::styled(
            " Subscribe ",
            Style::default().bg(Color::Black).fg(Color::White),
        )));
        lines.push(blank());

        // Our story
        lines.push(heading("Our Story"));
        lines.push(rule(theme.accent, 16));
        lines.push(Line::from(fallback(
            &answers.vision_statement,
            "We believe in the power of simplicity. Our journey started with a \
             vision to create products that combine functionality with minimal \
             aesthetics.",
        )));
        lines.push(Line::from(
            "Every product is thoughtfully designed with attention to detail and \
             commitment to quality.",
        ));
        lines.push(blank());

        // Contact / store card
        lines.push(heading("Visit Our Store"));
        let email = fallback(&answers.contact_info.email, "hello@minima.com");
        let phone = fallback(&answers.contact_info.phone, "+1 (555) 234-5678");
        let address = fallback(
            &answers.contact_info.address,
            "789 Minimalist Blvd, Design City, CA 90210",
        );
        if viewport.is_stacked() {
            lines.push(Line::from(email));
            lines.push(Line::from(phone));
        } else {
            lines.push(Line::from(format!("{email}   ·   {phone}")));
        }
        lines.push(Line::from(address));
        lines.push(Line::from(Span::styled(
            "Store Hours",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("Monday - Friday: 10am - 7pm"));
        lines.push(Line::from("Saturday: 11am - 6pm"));
        lines.push(Line::from("Sunday: Closed"));
        if let Some(row) = social_row(&answers.social_links, theme.primary) {
            lines.push(Line::from("Follow Us"));
            lines.push(row);
        }
        lines.push(blank());

        // Footer
        lines.push(rule(theme.primary, width));
        let footer_brand = Span::styled(brand, Style::default().fg(primary));
        let footer_legal = Span::styled(
            "Privacy Policy   Terms of Service   Shipping Info",
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
        plain_text(&MinimalTemplate.render(answers, &theme, viewport, 2026))
    }

    #[test]
    fn empty_business_name_falls_back_to_minima() {
        let answers = QuestionnaireAnswers::default();
        let theme = Theme::from_answers(&answers);
        let lines = MinimalTemplate.render(&answers, &theme, Viewport::Desktop, 2026);
        let nav = plain_text(&lines[..1]);
        assert_eq!(nav.matches("minima.").count(), 1);
    }

    #[test]
    fn vision_statement_feeds_the_story_section() {
        let mut answers = QuestionnaireAnswers::default();
        answers.vision_statement = "A calmer web for everyone.".to_string();
        let text = render(&answers, Viewport::Desktop);
        assert!(text.contains("A calmer web for everyone."));
        assert!(!text.contains("We believe in the power of simplicity."));
    }

    #[test]
    fn products_stack_on_mobile_and_grid_on_desktop() {
        let answers = QuestionnaireAnswers::default();
        let desktop = render(&answers, Viewport::Desktop);
        let mobile = render(&answers, Viewport::Mobile);
        // Grid rows carry three products per line on desktop.
        assert!(desktop.contains("Product 1  $99.00      Product 2  $99.00"));
        assert!(!mobile.contains("Product 1  $99.00      Product 2"));
        assert!(mobile.contains("Product 6  $99.00"));
    }

    #[test]
    fn mobile_hides_the_nav_link_row() {
        let answers = QuestionnaireAnswers::default();
        assert!(render(&answers, Viewport::Tablet).contains("Home   Products   About   Blog"));
        assert!(!render(&answers, Viewport::Mobile).contains("Home   Products"));
    }

    #[test]
    fn store_card_fallbacks_present() {
        let text = render(&QuestionnaireAnswers::default(), Viewport::Desktop);
        assert!(text.contains("hello@minima.com"));
        assert!(text.contains("789 Minimalist Blvd, Design City, CA 90210"));
        assert!(text.contains("Sunday: Closed"));
    }
}
