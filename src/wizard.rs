/// Number of editing steps. The preview is not a numbered step.
pub const TOTAL_STEPS: usize = 8;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Previewing,
}

/// Simulated device width for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    pub const ALL: [Viewport; 3] = [Viewport::Desktop, Viewport::Tablet, Viewport::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            Viewport::Desktop => "Desktop",
            Viewport::Tablet => "Tablet",
            Viewport::Mobile => "Mobile",
        }
    }

    /// Width in terminal columns the rendered page is confined to.
    /// Desktop takes whatever the terminal offers.
    pub fn content_width(self, available: u16) -> u16 {
        match self {
            Viewport::Desktop => available,
            Viewport::Tablet => available.min(76),
            Viewport::Mobile => available.min(40),
        }
    }

    /// Mobile stacks sections vertically and drops the nav link row.
    pub fn is_stacked(self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}

pub struct Step {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const STEPS: [Step; TOTAL_STEPS] = [
    Step {
        title: "Business Basics",
        subtitle: "Let's start with the fundamentals about your business.",
    },
    Step {
        title: "Target Audience",
        subtitle: "Tell us about your ideal customers or clients.",
    },
    Step {
        title: "Branding & Logo",
        subtitle: "Upload your logo to establish your brand identity.",
    },
    Step {
        title: "Design Preferences",
        subtitle: "Let's define the look and feel of your website.",
    },
    Step {
        title: "Mission & Vision",
        subtitle: "Share your company's purpose and goals.",
    },
    Step {
        title: "Website Features",
        subtitle: "Select the features you want on your website.",
    },
    Step {
        title: "Contact Information",
        subtitle: "Provide contact details to display on your website.",
    },
    Step {
        title: "Final Review",
        subtitle: "Review your information before generating your website.",
    },
];

/// Metadata for a 1-based step index.
pub fn step_info(step: usize) -> &'static Step {
    &STEPS[step.clamp(1, TOTAL_STEPS) - 1]
}

/// Per-session wizard state: current step while editing, plus the preview
/// viewport. Advancing past the last step commits to the preview; the only
/// way back from the preview lands on the last step.
#[derive(Debug, Clone, Copy)]
pub struct WizardSession {
    step: usize,
    mode: Mode,
    pub viewport: Viewport,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            step: 1,
            mode: Mode::Editing,
            viewport: Viewport::Desktop,
        }
    }

    /// Current step index, 1-based. Meaningful while editing.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Move forward. Returns true when the visible screen changed, so the
    /// caller can reset scroll state.
    pub fn advance(&mut self) -> bool {
        match self.mode {
            Mode::Editing if self.step < TOTAL_STEPS => {
                self.step += 1;
                true
            }
            Mode::Editing => {
                self.mode = Mode::Previewing;
                true
            }
            Mode::Previewing => false,
        }
    }

    /// Move backward. Leaving the preview always lands on the last editing
    /// step. Retreating below step 1 is a no-op.
    pub fn retreat(&mut self) -> bool {
        match self.mode {
            Mode::Previewing => {
                self.mode = Mode::Editing;
                self.step = TOTAL_STEPS;
                true
            }
            Mode::Editing if self.step > 1 => {
                self.step -= 1;
                true
            }
            Mode::Editing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_editing_at_step_one() {
        let session = WizardSession::new();
        assert_eq!(session.step(), 1);
        assert_eq!(session.mode(), Mode::Editing);
    }

    #[test]
    fn advance_walks_every_step_then_previews() {
        let mut session = WizardSession::new();
        for expected in 2..=TOTAL_STEPS {
            assert!(session.advance());
            assert_eq!(session.step(), expected);
            assert_eq!(session.mode(), Mode::Editing);
        }
        assert!(session.advance());
        assert_eq!(session.mode(), Mode::Previewing);
    }

    #[test]
    fn advance_in_preview_is_a_no_op() {
        let mut session = WizardSession::new();
        for _ in 0..TOTAL_STEPS {
            session.advance();
        }
        assert_eq!(session.mode(), Mode::Previewing);
        assert!(!session.advance());
        assert_eq!(session.mode(), Mode::Previewing);
    }

    #[test]
    fn retreat_at_step_one_is_a_no_op() {
        let mut session = WizardSession::new();
        assert!(!session.retreat());
        assert_eq!(session.step(), 1);
        assert_eq!(session.mode(), Mode::Editing);
    }

    #[test]
    fn retreat_from_preview_lands_on_last_step() {
        let mut session = WizardSession::new();
        for _ in 0..TOTAL_STEPS {
            session.advance();
        }
        assert!(session.retreat());
        assert_eq!(session.mode(), Mode::Editing);
        assert_eq!(session.step(), TOTAL_STEPS);
    }

    #[test]
    fn step_stays_in_bounds_under_arbitrary_walks() {
        let mut session = WizardSession::new();
        // A fixed pseudo-random-ish walk: retreat twice for every three
        // advances, then hammer both ends.
        for i in 0..100 {
            if i % 5 < 3 {
                session.advance();
            } else {
                session.retreat();
            }
            assert!(session.step() >= 1 && session.step() <= TOTAL_STEPS);
        }
        for _ in 0..20 {
            session.retreat();
            assert!(session.step() >= 1);
        }
        for _ in 0..20 {
            session.advance();
            assert!(session.step() <= TOTAL_STEPS);
        }
    }

    #[test]
    fn step_info_titles_line_up() {
        assert_eq!(step_info(1).title, "Business Basics");
        assert_eq!(step_info(3).title, "Branding & Logo");
        assert_eq!(step_info(TOTAL_STEPS).title, "Final Review");
    }

    #[test]
    fn mobile_viewport_stacks() {
        assert!(Viewport::Mobile.is_stacked());
        assert!(!Viewport::Desktop.is_stacked());
        assert!(!Viewport::Tablet.is_stacked());
    }

    #[test]
    fn viewport_widths_narrow_with_device() {
        assert_eq!(Viewport::Desktop.content_width(120), 120);
        assert_eq!(Viewport::Tablet.content_width(120), 76);
        assert_eq!(Viewport::Mobile.content_width(120), 40);
        // A narrow terminal bounds everything.
        assert_eq!(Viewport::Tablet.content_width(50), 50);
    }
}
