use std::path::PathBuf;

use serde::Serialize;

/// Industry choices offered on the first step. The industry also drives the
/// default template suggestion in the preview.
pub const INDUSTRY_OPTIONS: [&str; 12] = [
    "Retail",
    "Healthcare",
    "Education",
    "Finance",
    "Technology",
    "Food & Beverage",
    "Real Estate",
    "Travel",
    "Fitness",
    "Art & Design",
    "Professional Services",
    "Other",
];

/// Design style choices. Stored lowercase in the aggregate.
pub const DESIGN_STYLE_OPTIONS: [&str; 8] = [
    "Modern",
    "Minimalist",
    "Bold",
    "Elegant",
    "Playful",
    "Corporate",
    "Vintage",
    "Natural",
];

/// Website features the user can toggle on the features step.
pub const FEATURE_OPTIONS: [&str; 10] = [
    "Blog",
    "Online Store",
    "Booking System",
    "Contact Form",
    "Portfolio Gallery",
    "Newsletter Signup",
    "Testimonials",
    "FAQ Section",
    "Social Media Integration",
    "Video Content",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

/// A validated, decoded logo file. The pixel content is never inspected
/// beyond decoding; only the identity and dimensions are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoAsset {
    pub path: PathBuf,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// The single aggregate holding every questionnaire answer.
///
/// All string fields default to the empty string so the preview fallback
/// logic is total. Created once per session, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionnaireAnswers {
    pub business_name: String,
    pub business_type: String,
    pub industry: String,
    pub target_audience: String,
    pub mission_statement: String,
    pub vision_statement: String,
    /// Free-text fallback used when no logo was uploaded.
    pub color_preference: String,
    /// Brand colors from the extractor. Empty, or 3-5 hex strings where
    /// index 0 is primary, 1 secondary, 2 accent.
    pub extracted_colors: Vec<String>,
    pub logo: Option<LogoAsset>,
    pub design_style: String,
    pub contact_info: ContactInfo,
    pub social_links: SocialLinks,
    /// Selected website features. Set semantics: no duplicates, toggled
    /// by presence.
    pub features: Vec<String>,
}

impl Default for QuestionnaireAnswers {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            business_type: String::new(),
            industry: String::new(),
            target_audience: String::new(),
            mission_statement: String::new(),
            vision_statement: String::new(),
            color_preference: String::new(),
            extracted_colors: Vec::new(),
            logo: None,
            design_style: "modern".to_string(),
            contact_info: ContactInfo::default(),
            social_links: SocialLinks::default(),
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialField {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

/// A single field edit. Every answer the forms can change maps onto one
/// variant; nested edits name the inner key so siblings are preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    BusinessName(String),
    BusinessType(String),
    Industry(String),
    TargetAudience(String),
    MissionStatement(String),
    VisionStatement(String),
    ColorPreference(String),
    ExtractedColors(Vec<String>),
    Logo(Option<LogoAsset>),
    DesignStyle(String),
    Contact(ContactField, String),
    Social(SocialField, String),
    /// Remove the feature if present, append it otherwise.
    ToggleFeature(String),
}

/// Apply one edit to the aggregate, producing a new aggregate.
///
/// No edit is ever rejected; malformed emails, URLs and phone numbers are
/// accepted verbatim. Validation is out of scope by design.
pub fn update(answers: &QuestionnaireAnswers, edit: FieldEdit) -> QuestionnaireAnswers {
    let mut next = answers.clone();
    match edit {
        FieldEdit::BusinessName(v) => next.business_name = v,
        FieldEdit::BusinessType(v) => next.business_type = v,
        FieldEdit::Industry(v) => next.industry = v,
        FieldEdit::TargetAudience(v) => next.target_audience = v,
        FieldEdit::MissionStatement(v) => next.mission_statement = v,
        FieldEdit::VisionStatement(v) => next.vision_statement = v,
        FieldEdit::ColorPreference(v) => next.color_preference = v,
        FieldEdit::ExtractedColors(v) => next.extracted_colors = v,
        FieldEdit::Logo(v) => next.logo = v,
        FieldEdit::DesignStyle(v) => next.design_style = v,
        FieldEdit::Contact(field, v) => match field {
            ContactField::Email => next.contact_info.email = v,
            ContactField::Phone => next.contact_info.phone = v,
            ContactField::Address => next.contact_info.address = v,
        },
        FieldEdit::Social(field, v) => match field {
            SocialField::Facebook => next.social_links.facebook = v,
            SocialField::Instagram => next.social_links.instagram = v,
            SocialField::Twitter => next.social_links.twitter = v,
            SocialField::Linkedin => next.social_links.linkedin = v,
        },
        FieldEdit::ToggleFeature(feature) => {
            if let Some(pos) = next.features.iter().position(|f| f == &feature) {
                next.features.remove(pos);
            } else {
                next.features.push(feature);
            }
        }
    }
    next
}
