pub mod form;
pub mod widgets;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::answers::{update, FieldEdit, QuestionnaireAnswers};
use crate::export::{Publisher, StubPublisher};
use crate::extract::{extract_colors, spawn_logo_load, LogoLoaded};
use crate::preview::render_page;
use crate::template::{TemplateChoice, TemplateId};
use crate::wizard::{step_info, Mode, Viewport, WizardSession, TOTAL_STEPS};

use form::{fields_for_step, list_options, step_lines, FieldSlot, FormView};
use widgets::{chrome_bar, progress_line};

const BRANDING_STEP: usize = 3;

struct Status {
    text: String,
    error: bool,
}

/// The interactive application: wizard session, answers aggregate, and the
/// transient UI state around them. All mutation happens on the UI thread;
/// the only background work is the logo read, which reports over `logo_rx`.
pub struct App {
    pub session: WizardSession,
    pub answers: QuestionnaireAnswers,
    pub template_choice: TemplateChoice,
    publisher: Box<dyn Publisher>,
    focus: usize,
    list_cursor: usize,
    logo_input: String,
    logo_loading: bool,
    /// Sequence number of the newest logo request. Completions carrying an
    /// older number are stale and must be dropped.
    logo_generation: u64,
    logo_tx: Sender<LogoLoaded>,
    logo_rx: Receiver<LogoLoaded>,
    scroll: u16,
    status: Option<Status>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let (logo_tx, logo_rx) = channel();
        Self {
            session: WizardSession::new(),
            answers: QuestionnaireAnswers::default(),
            template_choice: TemplateChoice::default(),
            publisher: Box::new(StubPublisher),
            focus: 0,
            list_cursor: 0,
            logo_input: String::new(),
            logo_loading: false,
            logo_generation: 0,
            logo_tx,
            logo_rx,
            scroll: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn apply(&mut self, edit: FieldEdit) {
        self.answers = update(&self.answers, edit);
    }

    fn set_status(&mut self, text: String, error: bool) {
        self.status = Some(Status { text, error });
    }

    fn current_slot(&self) -> Option<FieldSlot> {
        fields_for_step(self.session.step()).get(self.focus).copied()
    }

    // --- navigation -------------------------------------------------------

    fn advance(&mut self) {
        if self.session.advance() {
            self.reset_screen_state();
        }
    }

    fn retreat(&mut self) {
        if self.session.retreat() {
            self.reset_screen_state();
        }
    }

    /// Scroll back to the top and re-anchor focus whenever the visible
    /// screen changes.
    fn reset_screen_state(&mut self) {
        self.focus = 0;
        self.scroll = 0;
        self.status = None;
        self.sync_list_cursor();
    }

    fn focus_next(&mut self) {
        let fields = fields_for_step(self.session.step());
        if fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % fields.len();
        self.sync_list_cursor();
    }

    fn focus_prev(&mut self) {
        let fields = fields_for_step(self.session.step());
        if fields.is_empty() {
            return;
        }
        self.focus = (self.focus + fields.len() - 1) % fields.len();
        self.sync_list_cursor();
    }

    /// Park the list cursor on the currently selected option, if any.
    fn sync_list_cursor(&mut self) {
        self.list_cursor = match self.current_slot() {
            Some(FieldSlot::IndustryList) => list_options(FieldSlot::IndustryList)
                .and_then(|opts| opts.iter().position(|o| *o == self.answers.industry))
                .unwrap_or(0),
            Some(FieldSlot::DesignStyleList) => list_options(FieldSlot::DesignStyleList)
                .and_then(|opts| {
                    opts.iter()
                        .position(|o| o.to_lowercase() == self.answers.design_style)
                })
                .unwrap_or(0),
            _ => 0,
        };
    }

    // --- editing ----------------------------------------------------------

    fn move_down(&mut self) {
        if let Some(options) = self.current_slot().and_then(list_options) {
            if self.list_cursor + 1 < options.len() {
                self.list_cursor += 1;
                self.apply_list_selection();
            }
        } else {
            self.focus_next();
        }
    }

    fn move_up(&mut self) {
        if self.current_slot().and_then(list_options).is_some() {
            if self.list_cursor > 0 {
                self.list_cursor -= 1;
                self.apply_list_selection();
            }
        } else {
            self.focus_prev();
        }
    }

    /// Single-choice lists select as the cursor moves, like a `<select>`.
    fn apply_list_selection(&mut self) {
        let Some(slot) = self.current_slot() else {
            return;
        };
        let Some(options) = list_options(slot) else {
            return;
        };
        let option = options[self.list_cursor];
        match slot {
            FieldSlot::IndustryList => self.apply(FieldEdit::Industry(option.to_string())),
            FieldSlot::DesignStyleList => {
                self.apply(FieldEdit::DesignStyle(option.to_lowercase()));
            }
            _ => {}
        }
    }

    fn toggle_feature_at_cursor(&mut self) {
        if let Some(options) = self.current_slot().and_then(list_options) {
            let feature = options[self.list_cursor].to_string();
            self.apply(FieldEdit::ToggleFeature(feature));
        }
    }

    fn insert_char(&mut self, c: char) {
        match self.current_slot() {
            Some(FieldSlot::Text(field)) => {
                let mut value = field.value(&self.answers).to_string();
                value.push(c);
                self.apply(field.edit(value));
            }
            Some(FieldSlot::LogoPath) => self.logo_input.push(c),
            _ => {}
        }
    }

    fn delete_char(&mut self) {
        match self.current_slot() {
            Some(FieldSlot::Text(field)) => {
                let mut value = field.value(&self.answers).to_string();
                value.pop();
                self.apply(field.edit(value));
            }
            Some(FieldSlot::LogoPath) => {
                self.logo_input.pop();
            }
            _ => {}
        }
    }

    // --- logo loading -----------------------------------------------------

    /// Kick off a background load of the given image. Bumps the generation
    /// so any earlier in-flight load becomes stale.
    pub fn request_logo_load(&mut self, path: PathBuf) {
        self.logo_input = path.display().to_string();
        self.logo_generation += 1;
        self.logo_loading = true;
        self.set_status(format!("Loading {}...", path.display()), false);
        spawn_logo_load(path, self.logo_generation, self.logo_tx.clone());
    }

    fn load_logo_from_input(&mut self) {
        if self.session.step() != BRANDING_STEP {
            return;
        }
        let path = self.logo_input.trim().to_string();
        if path.is_empty() {
            self.set_status("Enter a path to your logo image first".to_string(), true);
            return;
        }
        self.request_logo_load(PathBuf::from(path));
    }

    /// Remove the uploaded logo and clear the extracted colors. Also
    /// invalidates any load still in flight.
    fn remove_logo(&mut self) {
        if self.session.step() != BRANDING_STEP {
            return;
        }
        self.logo_generation += 1;
        self.logo_loading = false;
        self.logo_input.clear();
        self.apply(FieldEdit::Logo(None));
        self.apply(FieldEdit::ExtractedColors(Vec::new()));
        self.set_status("Logo removed; extracted colors cleared".to_string(), false);
    }

    /// Drain logo-load completions. Only a completion whose generation
    /// matches the current one is applied; anything else raced with a
    /// removal or replacement and is dropped.
    pub fn poll_logo_loads(&mut self) {
        while let Ok(loaded) = self.logo_rx.try_recv() {
            if loaded.generation != self.logo_generation {
                continue;
            }
            self.logo_loading = false;
            match loaded.result {
                Ok(asset) => {
                    let colors = extract_colors(&mut rand::thread_rng());
                    self.set_status(
                        format!(
                            "Extracted {} brand colors from {}",
                            colors.len(),
                            asset.file_name
                        ),
                        false,
                    );
                    self.apply(FieldEdit::Logo(Some(asset)));
                    self.apply(FieldEdit::ExtractedColors(colors));
                }
                Err(err) => self.set_status(err.to_string(), true),
            }
        }
    }

    // --- export -----------------------------------------------------------

    fn export(&mut self) {
        match self.publisher.publish(&self.answers) {
            Ok(handle) => self.set_status(
                format!(
                    "This would publish '{}' to your website platform ({} bytes staged)",
                    handle.site_name,
                    handle.payload.len()
                ),
                false,
            ),
            Err(err) => self.set_status(format!("Export failed: {err}"), true),
        }
    }

    // --- key dispatch -----------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }
        match self.session.mode() {
            Mode::Editing => self.handle_editing_key(key),
            Mode::Previewing => self.handle_preview_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('o') => self.load_logo_from_input(),
                KeyCode::Char('x') => self.remove_logo(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => self.retreat(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char(' ')
                if matches!(self.current_slot(), Some(FieldSlot::FeatureList)) =>
            {
                self.toggle_feature_at_cursor();
            }
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('d') => self.session.viewport = Viewport::Desktop,
            KeyCode::Char('t') => self.session.viewport = Viewport::Tablet,
            KeyCode::Char('m') => self.session.viewport = Viewport::Mobile,
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(id) = TemplateId::from_number(c as u8 - b'0') {
                    self.template_choice.choose(id);
                }
            }
            KeyCode::Char('e') => self.export(),
            KeyCode::Esc | KeyCode::Backspace => self.retreat(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal shell
// ---------------------------------------------------------------------------

/// Run the application until the user quits. Owns terminal setup/teardown.
pub fn run(mut app: App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        app.poll_logo_loads();
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    match app.session.mode() {
        Mode::Editing => {
            draw_editing_header(frame, app, header);
            draw_form(frame, app, body);
        }
        Mode::Previewing => {
            draw_preview_header(frame, app, header);
            draw_preview(frame, app, body);
        }
    }
    draw_footer(frame, app, footer);
}

fn draw_editing_header(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.session.step();
    let title = Line::from(vec![
        Span::styled(
            "Website Generator",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  —  "),
        Span::styled(
            step_info(step).title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(vec![title, progress_line(step, TOTAL_STEPS)]),
        area,
    );
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let view = FormView {
        answers: &app.answers,
        step: app.session.step(),
        focus: app.focus,
        list_cursor: app.list_cursor,
        logo_input: &app.logo_input,
        logo_loading: app.logo_loading,
    };
    let paragraph = Paragraph::new(step_lines(&view))
        .block(Block::bordered())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_preview_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut tabs = vec![Span::styled(
        "Website Preview",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    tabs.push(Span::raw("   "));
    for viewport in Viewport::ALL {
        let mut style = Style::default().fg(Color::Gray);
        if viewport == app.session.viewport {
            style = Style::default().bg(Color::Cyan).fg(Color::Black);
        }
        tabs.push(Span::styled(format!(" {} ", viewport.label()), style));
        tabs.push(Span::raw(" "));
    }

    let effective = app.template_choice.effective(&app.answers.industry);
    let mut chooser = vec![Span::raw("Template: ")];
    for id in TemplateId::ALL {
        let mut style = Style::default().fg(Color::Gray);
        if id == effective {
            style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        chooser.push(Span::styled(
            format!("{} {}", id.number(), id.tagline()),
            style,
        ));
        chooser.push(Span::raw("   "));
    }
    if !app.template_choice.is_explicit() {
        chooser.push(Span::styled(
            "(suggested for your industry)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(tabs), Line::from(chooser)]),
        area,
    );
}

fn draw_preview(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = if app.answers.business_name.is_empty() {
        "Your Business"
    } else {
        app.answers.business_name.as_str()
    };
    let chrome = chrome_bar(&format!(
        "{brand} - {} Preview",
        app.session.viewport.label()
    ));

    let [chrome_area, page_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
    frame.render_widget(Paragraph::new(chrome), chrome_area);

    // Confine the page to the simulated device width, centered.
    let width = app.session.viewport.content_width(page_area.width);
    let offset = (page_area.width.saturating_sub(width)) / 2;
    let page_rect = Rect {
        x: page_area.x + offset,
        y: page_area.y,
        width,
        height: page_area.height,
    };

    let effective = app.template_choice.effective(&app.answers.industry);
    let year = chrono::Local::now().year();
    let lines = render_page(&app.answers, effective, app.session.viewport, year);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, page_rect);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let status = match &app.status {
        Some(status) => {
            let color = if status.error { Color::Red } else { Color::Green };
            Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(""),
    };
    let hints = match app.session.mode() {
        Mode::Editing if app.session.step() == BRANDING_STEP => Line::from(Span::styled(
            "Enter next · Esc back · Tab field · Ctrl+O load logo · Ctrl+X remove · Ctrl+Q quit",
            Style::default().fg(Color::DarkGray),
        )),
        Mode::Editing => Line::from(Span::styled(
            "Enter next · Esc back · Tab field · ↑↓ select · Ctrl+Q quit",
            Style::default().fg(Color::DarkGray),
        )),
        Mode::Previewing => Line::from(Span::styled(
            "d/t/m viewport · 1-3 template · e export · ↑↓ scroll · Esc back · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(vec![status, hints]), area);
}
