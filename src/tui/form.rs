use ratatui::prelude::*;

use crate::answers::{
    ContactField, FieldEdit, QuestionnaireAnswers, SocialField, DESIGN_STYLE_OPTIONS,
    FEATURE_OPTIONS, INDUSTRY_OPTIONS,
};
use crate::wizard::{step_info, TOTAL_STEPS};

use super::widgets::swatch_row;

/// A single editable free-text answer addressed by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    BusinessName,
    BusinessType,
    TargetAudience,
    ColorPreference,
    MissionStatement,
    VisionStatement,
    Email,
    Phone,
    Address,
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            TextField::BusinessName => "What's your business name?",
            TextField::BusinessType => "What type of business do you run?",
            TextField::TargetAudience => "Describe your target audience",
            TextField::ColorPreference => "Describe your color preferences if no logo was uploaded",
            TextField::MissionStatement => "Mission Statement (What you do now)",
            TextField::VisionStatement => "Vision Statement (What you aspire to achieve)",
            TextField::Email => "Email Address",
            TextField::Phone => "Phone Number",
            TextField::Address => "Business Address",
            TextField::Facebook => "Facebook",
            TextField::Instagram => "Instagram",
            TextField::Twitter => "Twitter",
            TextField::Linkedin => "LinkedIn",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            TextField::BusinessName => "e.g., Acme Enterprises",
            TextField::BusinessType => "e.g., Consulting Agency, Restaurant, Online Shop",
            TextField::TargetAudience => {
                "e.g., Professionals aged 25-40 interested in personal development"
            }
            TextField::ColorPreference => {
                "e.g., Blues and whites for a clean, professional look"
            }
            TextField::MissionStatement => {
                "e.g., Our mission is to provide affordable, sustainable products"
            }
            TextField::VisionStatement => {
                "e.g., We envision a world where sustainable products are the norm"
            }
            TextField::Email => "contact@yourbusiness.com",
            TextField::Phone => "+1 (555) 123-4567",
            TextField::Address => "123 Main St, City, State, ZIP",
            TextField::Facebook => "https://facebook.com/yourbusiness",
            TextField::Instagram => "https://instagram.com/yourbusiness",
            TextField::Twitter => "https://twitter.com/yourbusiness",
            TextField::Linkedin => "https://linkedin.com/company/yourbusiness",
        }
    }

    pub fn value(self, answers: &QuestionnaireAnswers) -> &str {
        match self {
            TextField::BusinessName => &answers.business_name,
            TextField::BusinessType => &answers.business_type,
            TextField::TargetAudience => &answers.target_audience,
            TextField::ColorPreference => &answers.color_preference,
            TextField::MissionStatement => &answers.mission_statement,
            TextField::VisionStatement => &answers.vision_statement,
            TextField::Email => &answers.contact_info.email,
            TextField::Phone => &answers.contact_info.phone,
            TextField::Address => &answers.contact_info.address,
            TextField::Facebook => &answers.social_links.facebook,
            TextField::Instagram => &answers.social_links.instagram,
            TextField::Twitter => &answers.social_links.twitter,
            TextField::Linkedin => &answers.social_links.linkedin,
        }
    }

    pub fn edit(self, value: String) -> FieldEdit {
        match self {
            TextField::BusinessName => FieldEdit::BusinessName(value),
            TextField::BusinessType => FieldEdit::BusinessType(value),
            TextField::TargetAudience => FieldEdit::TargetAudience(value),
            TextField::ColorPreference => FieldEdit::ColorPreference(value),
            TextField::MissionStatement => FieldEdit::MissionStatement(value),
            TextField::VisionStatement => FieldEdit::VisionStatement(value),
            TextField::Email => FieldEdit::Contact(ContactField::Email, value),
            TextField::Phone => FieldEdit::Contact(ContactField::Phone, value),
            TextField::Address => FieldEdit::Contact(ContactField::Address, value),
            TextField::Facebook => FieldEdit::Social(SocialField::Facebook, value),
            TextField::Instagram => FieldEdit::Social(SocialField::Instagram, value),
            TextField::Twitter => FieldEdit::Social(SocialField::Twitter, value),
            TextField::Linkedin => FieldEdit::Social(SocialField::Linkedin, value),
        }
    }
}

/// One focusable slot on a step's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Text(TextField),
    IndustryList,
    DesignStyleList,
    FeatureList,
    LogoPath,
}

/// Focusable slots per 1-based step. The review step has none.
pub fn fields_for_step(step: usize) -> &'static [FieldSlot] {
    match step {
        1 => &[
            FieldSlot::Text(TextField::BusinessName),
            FieldSlot::Text(TextField::BusinessType),
            FieldSlot::IndustryList,
        ],
        2 => &[FieldSlot::Text(TextField::TargetAudience)],
        3 => &[FieldSlot::LogoPath],
        4 => &[
            FieldSlot::DesignStyleList,
            FieldSlot::Text(TextField::ColorPreference),
        ],
        5 => &[
            FieldSlot::Text(TextField::MissionStatement),
            FieldSlot::Text(TextField::VisionStatement),
        ],
        6 => &[FieldSlot::FeatureList],
        7 => &[
            FieldSlot::Text(TextField::Email),
            FieldSlot::Text(TextField::Phone),
            FieldSlot::Text(TextField::Address),
            FieldSlot::Text(TextField::Facebook),
            FieldSlot::Text(TextField::Instagram),
            FieldSlot::Text(TextField::Twitter),
            FieldSlot::Text(TextField::Linkedin),
        ],
        _ => &[],
    }
}

/// Options shown by a list slot, if the slot is a list.
pub fn list_options(slot: FieldSlot) -> Option<&'static [&'static str]> {
    match slot {
        FieldSlot::IndustryList => Some(&INDUSTRY_OPTIONS[..]),
        FieldSlot::DesignStyleList => Some(&DESIGN_STYLE_OPTIONS[..]),
        FieldSlot::FeatureList => Some(&FEATURE_OPTIONS[..]),
        _ => None,
    }
}

/// Everything the form renderer needs to draw the current step.
pub struct FormView<'a> {
    pub answers: &'a QuestionnaireAnswers,
    pub step: usize,
    pub focus: usize,
    pub list_cursor: usize,
    pub logo_input: &'a str,
    pub logo_loading: bool,
}

pub fn step_lines(view: &FormView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            step_info(view.step).subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    if view.step == TOTAL_STEPS {
        lines.extend(review_lines(view.answers));
        return lines;
    }

    for (index, slot) in fields_for_step(view.step).iter().enumerate() {
        let focused = index == view.focus;
        match *slot {
            FieldSlot::Text(field) => text_field_lines(&mut lines, view.answers, field, focused),
            FieldSlot::IndustryList => {
                option_list_lines(
                    &mut lines,
                    "Select your industry",
                    &INDUSTRY_OPTIONS,
                    |opt| view.answers.industry == opt,
                    focused,
                    view.list_cursor,
                );
            }
            FieldSlot::DesignStyleList => {
                option_list_lines(
                    &mut lines,
                    "Select your preferred design style",
                    &DESIGN_STYLE_OPTIONS,
                    |opt| view.answers.design_style == opt.to_lowercase(),
                    focused,
                    view.list_cursor,
                );
                color_preview_lines(&mut lines, view.answers);
            }
            FieldSlot::FeatureList => {
                option_list_lines(
                    &mut lines,
                    "Select the features you want",
                    &FEATURE_OPTIONS,
                    |opt| view.answers.features.iter().any(|f| f.as_str() == opt),
                    focused,
                    view.list_cursor,
                );
            }
            FieldSlot::LogoPath => logo_field_lines(&mut lines, view, focused),
        }
        lines.push(Line::from(""));
    }

    lines
}

fn field_label(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker.to_string(), style),
        Span::styled(label.to_string(), style),
    ])
}

fn text_field_lines(
    lines: &mut Vec<Line<'static>>,
    answers: &QuestionnaireAnswers,
    field: TextField,
    focused: bool,
) {
    lines.push(field_label(field.label(), focused));
    let value = field.value(answers);
    let mut spans = vec![Span::raw("    ")];
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
    }
    lines.push(Line::from(spans));
}

fn option_list_lines(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    options: &[&str],
    is_selected: impl Fn(&str) -> bool,
    focused: bool,
    cursor: usize,
) {
    lines.push(field_label(label, focused));
    for (index, option) in options.iter().enumerate() {
        let selected = is_selected(option);
        let marker = if selected { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if focused && index == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(
            format!("    {marker} {option}"),
            style,
        )));
    }
}

/// Extracted swatches on the design step; falls back to the free-text
/// color preference prompt when no logo was uploaded.
fn color_preview_lines(lines: &mut Vec<Line<'static>>, answers: &QuestionnaireAnswers) {
    if answers.extracted_colors.is_empty() {
        return;
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Colors extracted from your logo:".to_string(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(swatch_row(&answers.extracted_colors));
    lines.push(Line::from(Span::styled(
        "  These colors will be used as the basis for your website's color scheme.".to_string(),
        Style::default().fg(Color::DarkGray),
    )));
}

fn logo_field_lines(lines: &mut Vec<Line<'static>>, view: &FormView, focused: bool) {
    lines.push(field_label("Path to your logo image", focused));
    let mut spans = vec![Span::raw("    ")];
    if view.logo_input.is_empty() && !focused {
        spans.push(Span::styled(
            "e.g., ~/branding/logo.png",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(view.logo_input.to_string()));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
    }
    lines.push(Line::from(spans));
    lines.push(Line::from(""));

    if view.logo_loading {
        lines.push(Line::from(Span::styled(
            "    Loading logo...".to_string(),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(logo) = &view.answers.logo {
        lines.push(Line::from(Span::styled(
            format!(
                "    {} uploaded successfully ({}x{})",
                logo.file_name, logo.width, logo.height
            ),
            Style::default().fg(Color::Green),
        )));
        if !view.answers.extracted_colors.is_empty() {
            lines.push(Line::from("    Extracted Colors"));
            lines.push(swatch_row(&view.answers.extracted_colors));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "    Uploading your logo will help us extract your brand colors automatically."
                .to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "    If you don't have a logo yet, you'll be able to select colors in the next step."
                .to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn review_heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn review_entry(label: &str, value: &str) -> Line<'static> {
    let shown = if value.is_empty() { "Not provided" } else { value };
    Line::from(vec![
        Span::styled(
            format!("  {label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(shown.to_string()),
    ])
}

fn review_lines(answers: &QuestionnaireAnswers) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(review_heading("Business Information"));
    lines.push(review_entry("Business Name", &answers.business_name));
    lines.push(review_entry("Business Type", &answers.business_type));
    lines.push(review_entry("Industry", &answers.industry));
    lines.push(Line::from(""));

    lines.push(review_heading("Target Audience"));
    lines.push(review_entry("Audience", &answers.target_audience));
    lines.push(Line::from(""));

    lines.push(review_heading("Branding"));
    let logo_state = if answers.logo.is_some() {
        "Uploaded"
    } else {
        "Not uploaded"
    };
    lines.push(review_entry("Logo", logo_state));
    lines.push(review_entry("Design Style", &answers.design_style));
    if answers.extracted_colors.is_empty() {
        lines.push(review_entry("Color Preference", &answers.color_preference));
    } else {
        lines.push(Line::from(Span::styled(
            "  Extracted Colors:".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(swatch_row(&answers.extracted_colors));
    }
    lines.push(Line::from(""));

    lines.push(review_heading("Mission & Vision"));
    lines.push(review_entry("Mission", &answers.mission_statement));
    lines.push(review_entry("Vision", &answers.vision_statement));
    lines.push(Line::from(""));

    lines.push(review_heading("Selected Features"));
    if answers.features.is_empty() {
        lines.push(Line::from("  No features selected"));
    } else {
        for feature in &answers.features {
            lines.push(Line::from(format!("  • {feature}")));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Press Enter to generate your website preview.".to_string(),
        Style::default().fg(Color::Gray),
    )));

    lines
}
