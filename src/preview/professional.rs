use ratatui::prelude::*;

use crate::answers::QuestionnaireAnswers;
use crate::template::TemplateId;
use crate::wizard::Viewport;

use super::{
    blank, copyright, fallback, heading, page_width, rule, social_row, tui_color, Template, Theme,
};

/// Template 1: "Professional & Clean". Light chrome, primary-colored nav
/// brand, three service cards, contact block with a message form.
pub struct ProfessionalTemplate;

impl Template for ProfessionalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn render(
        &self,
        answers: &QuestionnaireAnswers,
        theme: &Theme,
        viewport: Viewport,
        year: i32,
    ) -> Vec<Line<'static>> {
        let primary = tui_color(theme.primary);
        let brand = fallback(&answers.business_name, "Your Business");
        let width = page_width(viewport);
        let mut lines = Vec::new();

        // Navigation
        let brand_span = Span::styled(
            brand.clone(),
            Style::default().fg(primary).add_modifier(Modifier::BOLD),
        );
        if viewport.is_stacked() {
            lines.push(Line::from(brand_span).alignment(Alignment::Center));
        } else {
            lines.push(Line::from(vec![
                brand_span,
                Span::raw("      "),
                Span::styled(
                    "Home   About   Services   Contact",
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(rule(theme.primary, width));
        lines.push(blank());

        // Hero
        lines.push(heading(&fallback(
            &answers.business_name,
            "Your Business Name",
        )));
        lines.push(Line::from(fallback(
            &answers.mission_statement,
            "Your mission statement will appear here.",
        )));
        let get_started = Span::styled(
            " Get Started ",
            Style::default().bg(primary).fg(Color::White),
        );
        let learn_more = Span::styled(" Learn More ", Style::default().fg(primary));
        if viewport.is_stacked() {
            lines.push(Line::from(get_started).alignment(Alignment::Center));
            lines.push(Line::from(learn_more).alignment(Alignment::Center));
        } else {
            lines.push(Line::from(vec![get_started, Span::raw("  "), learn_more]));
        }
        lines.push(blank());

        // About
        lines.push(heading("About Us"));
        lines.push(rule(theme.secondary, 20));
        lines.push(Line::from(Span::styled(
            "Our Mission",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(fallback(
            &answers.mission_statement,
            "Our mission is to provide the highest quality products and services \
             to our customers while maintaining the highest standards of integrity \
             and excellence.",
        )));
        lines.push(Line::from(Span::styled(
            "Our Vision",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(fallback(
            &answers.vision_statement,
            "We envision a world where our innovative solutions make a positive \
             impact on the lives of our customers and communities.",
        )));
        lines.push(blank());

        // Services
        lines.push(heading("Our Services"));
        lines.push(rule(theme.secondary, 20));
        lines.push(Line::from(format!(
            "What {} can do for you",
            fallback(&answers.business_name, "we")
        )));
        for index in 1..=3 {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Service {index}"),
                    Style::default().fg(primary).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  Lorem ipsum dolor sit amet, consectetur adipiscing elit."),
            ]));
        }
        lines.push(blank());

        // Contact
        lines.push(heading("Contact Us"));
        lines.push(rule(theme.secondary, 20));
        let email = fallback(&answers.contact_info.email, "contact@yourbusiness.com");
        let phone = fallback(&answers.contact_info.phone, "+1 (555) 123-4567");
        let address = fallback(&answers.contact_info.address, "123 Main St, City, State, ZIP");
        if viewport.is_stacked() {
            lines.push(Line::from(email));
            lines.push(Line::from(phone));
        } else {
            lines.push(Line::from(format!("{email}   ·   {phone}")));
        }
        lines.push(Line::from(address));
        if let Some(row) = social_row(&answers.social_links, theme.primary) {
            lines.push(Line::from("Follow Us"));
            lines.push(row);
        }
        lines.push(Line::from(Span::styled(
            " Send us a Message ",
            Style::default().bg(primary).fg(Color::White),
        )));
        lines.push(blank());

        // Footer
        lines.push(rule(theme.primary, width));
        let footer_brand = Span::styled(brand, Style::default().add_modifier(Modifier::BOLD));
        let footer_legal = Span::styled(
            "Privacy Policy   Terms of Service",
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
