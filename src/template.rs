/// The three fixed page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Professional,
    Creative,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::Professional,
        TemplateId::Creative,
        TemplateId::Minimal,
    ];

    /// The 1-based template number shown in the chooser.
    pub fn number(self) -> u8 {
        match self {
            TemplateId::Professional => 1,
            TemplateId::Creative => 2,
            TemplateId::Minimal => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<TemplateId> {
        match n {
            1 => Some(TemplateId::Professional),
            2 => Some(TemplateId::Creative),
            3 => Some(TemplateId::Minimal),
            _ => None,
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            TemplateId::Professional => "Professional & Clean",
            TemplateId::Creative => "Creative & Bold",
            TemplateId::Minimal => "Modern & Minimalist",
        }
    }
}

/// Suggest a template for an industry. Case-insensitive; unknown or empty
/// industries fall back to the professional template.
pub fn default_for_industry(industry: &str) -> TemplateId {
    match industry.to_lowercase().as_str() {
        "retail" | "food & beverage" => TemplateId::Minimal,
        "art & design" | "fitness" => TemplateId::Creative,
        "technology" | "education" | "professional services" => TemplateId::Professional,
        _ => TemplateId::Professional,
    }
}

/// The session's template selection.
///
/// An explicit user pick is stored separately from the industry default so
/// the two can never be confused: picking template 1 by hand is as sticky
/// as picking any other, no matter how the industry changes afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateChoice {
    explicit: Option<TemplateId>,
}

impl TemplateChoice {
    /// Record an explicit pick. Sticky for the rest of the session.
    pub fn choose(&mut self, id: TemplateId) {
        self.explicit = Some(id);
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit.is_some()
    }

    /// The template the preview should use: the explicit pick if one was
    /// made, otherwise the industry default.
    pub fn effective(&self, industry: &str) -> TemplateId {
        self.explicit
            .unwrap_or_else(|| default_for_industry(industry))
    }
}
