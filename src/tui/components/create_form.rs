//! # CreateForm Component
//!
//! The Create screen: festival picker, recipient details, tone, notes and
//! the two action buttons.
//!
//! `CreateFormState` (focus + one `TextFieldState` per field) persists in
//! `TuiState`. `CreateForm` wraps it for a single frame or event together
//! with the current `FormState` from the core. All edits leave as
//! `CreateFormEvent`s; the caller turns them into `Action`s.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::catalog::{FESTIVALS, TONES, festival, festival_index, tone_index};
use crate::core::form::{Field, FormState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::choice_row::{ChoiceEvent, ChoiceOption, ChoiceRow};
use crate::tui::components::text_field::{TextField, TextFieldEvent, TextFieldState};
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SEND_LABEL: &str = "Generate & Send";
const SENDING_LABEL: &str = "Sending Magic...";
const RESET_LABEL: &str = "Reset Form";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormFocus {
    #[default]
    Festival,
    CustomOccasion,
    RecipientName,
    RecipientEmail,
    Relationship,
    Tone,
    SenderName,
    AdditionalTouches,
    SendButton,
    ResetButton,
}

impl FormFocus {
    pub const ALL: [FormFocus; 10] = [
        FormFocus::Festival,
        FormFocus::CustomOccasion,
        FormFocus::RecipientName,
        FormFocus::RecipientEmail,
        FormFocus::Relationship,
        FormFocus::Tone,
        FormFocus::SenderName,
        FormFocus::AdditionalTouches,
        FormFocus::SendButton,
        FormFocus::ResetButton,
    ];

    /// Text field behind this focus target, if any.
    pub const fn field(self) -> Option<Field> {
        match self {
            FormFocus::CustomOccasion => Some(Field::CustomOccasion),
            FormFocus::RecipientName => Some(Field::RecipientName),
            FormFocus::RecipientEmail => Some(Field::RecipientEmail),
            FormFocus::Relationship => Some(Field::Relationship),
            FormFocus::SenderName => Some(Field::SenderName),
            FormFocus::AdditionalTouches => Some(Field::AdditionalTouches),
            FormFocus::Festival | FormFocus::Tone | FormFocus::SendButton | FormFocus::ResetButton => None,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn visible(self, show_custom: bool) -> bool {
        show_custom || self != FormFocus::CustomOccasion
    }

    /// Next focus target, wrapping. The custom occasion field only takes
    /// focus while "Other" is selected.
    pub fn next(self, show_custom: bool) -> Self {
        self.step(show_custom, 1)
    }

    pub fn prev(self, show_custom: bool) -> Self {
        self.step(show_custom, Self::ALL.len() - 1)
    }

    fn step(self, show_custom: bool, by: usize) -> Self {
        let len = Self::ALL.len();
        let mut idx = self.index();
        loop {
            idx = (idx + by) % len;
            let candidate = Self::ALL[idx];
            if candidate.visible(show_custom) {
                return candidate;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateFormEvent {
    Edit(Field, String),
    SelectFestival(&'static str),
    SelectTone(&'static str),
    Submit,
    Reset,
}

#[derive(Debug, Default)]
pub struct CreateFormState {
    pub focus: FormFocus,
    fields: HashMap<Field, TextFieldState>,
}

impl CreateFormState {
    /// Back to the first control with fresh cursors (after a form reset).
    pub fn reset(&mut self) {
        self.focus = FormFocus::default();
        self.fields.clear();
    }

    fn move_focus(&mut self, form: &FormState, forward: bool) {
        let show_custom = form.is_other();
        self.focus = if forward {
            self.focus.next(show_custom)
        } else {
            self.focus.prev(show_custom)
        };
        if let Some(field) = self.focus.field() {
            self.fields.entry(field).or_default().move_to_end(form.get(field));
        }
    }
}

pub struct CreateForm<'a> {
    pub form: &'a FormState,
    pub state: &'a mut CreateFormState,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl<'a> CreateForm<'a> {
    pub fn new(form: &'a FormState, state: &'a mut CreateFormState, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            form,
            state,
            is_loading,
            spinner_frame,
        }
    }

    fn festival_row(&self) -> ChoiceRow<'static> {
        let options = FESTIVALS
            .iter()
            .map(|f| ChoiceOption {
                icon: f.icon,
                label: f.label,
            })
            .collect();
        let detail = festival(&self.form.festival)
            .map(|f| format!("{}  ·  🖼 {}", f.description, f.image_or_fallback()));
        ChoiceRow::new("Choose Your Festival *", options, festival_index(&self.form.festival))
            .focused(self.state.focus == FormFocus::Festival)
            .detail(detail)
    }

    fn tone_row(&self) -> ChoiceRow<'static> {
        let options = TONES
            .iter()
            .map(|t| ChoiceOption {
                icon: t.icon,
                label: t.value,
            })
            .collect();
        ChoiceRow::new("Message Tone", options, tone_index(&self.form.tone))
            .vertical()
            .focused(self.state.focus == FormFocus::Tone)
    }

    fn render_field(&mut self, frame: &mut Frame, field: Field, area: Rect) {
        let focused = self.state.focus.field() == Some(field);
        let state = self.state.fields.entry(field).or_default();
        TextField::new(field, self.form.get(field), state, focused).render(frame, area);
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let button_style = |focus: FormFocus| {
            if self.state.focus == focus {
                Style::default().fg(Color::Black).bg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Magenta)
            }
        };

        let send = if self.is_loading {
            let frame_char = SPINNER[self.spinner_frame % SPINNER.len()];
            Span::styled(
                format!(" {frame_char} {SENDING_LABEL} "),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" ✨ {SEND_LABEL} "), button_style(FormFocus::SendButton))
        };
        let reset = Span::styled(format!(" ↺ {RESET_LABEL} "), button_style(FormFocus::ResetButton));

        let line = Line::from(vec![send, Span::raw("   "), reset]);
        frame.render_widget(Paragraph::new(vec![Line::default(), line]).centered(), area);
    }

    fn select_event(&mut self, event: &TuiEvent) -> Option<CreateFormEvent> {
        match self.state.focus {
            FormFocus::Festival => match self.festival_row().handle_event(event)? {
                ChoiceEvent::Select(i) => FESTIVALS.get(i).map(|f| CreateFormEvent::SelectFestival(f.value)),
            },
            FormFocus::Tone => match self.tone_row().handle_event(event)? {
                ChoiceEvent::Select(i) => TONES.get(i).map(|t| CreateFormEvent::SelectTone(t.value)),
            },
            _ => None,
        }
    }
}

impl Component for CreateForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let mut festival_row = self.festival_row();
        let custom_height = if self.form.is_other() {
            TextField::height(Field::CustomOccasion)
        } else {
            0
        };
        let mut tone_row = self.tone_row();
        let left_height = TextField::height(Field::RecipientName)
            + TextField::height(Field::RecipientEmail)
            + TextField::height(Field::Relationship);
        let right_height = tone_row.height() + TextField::height(Field::SenderName);

        let [festival_area, custom_area, columns_area, notes_area, buttons_area, _] = Layout::vertical([
            Length(festival_row.height()),
            Length(custom_height),
            Length(left_height.max(right_height)),
            Length(TextField::height(Field::AdditionalTouches)),
            Length(2),
            Min(0),
        ])
        .areas(area);

        festival_row.render(frame, festival_area);
        if self.form.is_other() {
            self.render_field(frame, Field::CustomOccasion, custom_area);
        }

        let [left, right] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(columns_area);

        let [name_area, email_area, relationship_area, _] = Layout::vertical([
            Length(TextField::height(Field::RecipientName)),
            Length(TextField::height(Field::RecipientEmail)),
            Length(TextField::height(Field::Relationship)),
            Min(0),
        ])
        .areas(left);
        self.render_field(frame, Field::RecipientName, name_area);
        self.render_field(frame, Field::RecipientEmail, email_area);
        self.render_field(frame, Field::Relationship, relationship_area);

        let [tone_area, sender_area, _] = Layout::vertical([
            Length(tone_row.height()),
            Length(TextField::height(Field::SenderName)),
            Min(0),
        ])
        .areas(right);
        tone_row.render(frame, tone_area);
        self.render_field(frame, Field::SenderName, sender_area);

        self.render_field(frame, Field::AdditionalTouches, notes_area);
        self.render_buttons(frame, buttons_area);
    }
}

impl EventHandler for CreateForm<'_> {
    type Event = CreateFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.state.move_focus(self.form, true);
                return None;
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.state.move_focus(self.form, false);
                return None;
            }
            _ => {}
        }

        let focus = self.state.focus;
        if let Some(field) = focus.field() {
            let state = self.state.fields.entry(field).or_default();
            let field_event = TextField::new(field, self.form.get(field), state, true).handle_event(event)?;
            return match field_event {
                TextFieldEvent::Changed(value) => Some(CreateFormEvent::Edit(field, value)),
                TextFieldEvent::Advance => {
                    self.state.move_focus(self.form, true);
                    None
                }
            };
        }

        match (focus, event) {
            (FormFocus::SendButton, TuiEvent::Submit | TuiEvent::InputChar(' ')) => Some(CreateFormEvent::Submit),
            (FormFocus::ResetButton, TuiEvent::Submit | TuiEvent::InputChar(' ')) => Some(CreateFormEvent::Reset),
            (FormFocus::Festival | FormFocus::Tone, TuiEvent::Submit) => {
                self.state.move_focus(self.form, true);
                None
            }
            _ => self.select_event(event),
        }
    }
}
