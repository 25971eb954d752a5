//! Bottom-anchored action-sheet widget.

use crossterm::event::{KeyCode, KeyEvent};
use modalkit_core::{Action, DialogDescriptor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::common::bottom_rect;
use crate::theme::Theme;

/// What a key event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOutcome {
    /// The main-list action at this index was chosen.
    Selected(usize),
    /// The cancel slot was chosen, or the user asked to dismiss (Esc).
    Cancelled,
}

/// Where the selection cursor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetCursor {
    /// On the main-list action at this index.
    Action(usize),
    /// On the separated cancel slot.
    Cancel,
}

/// Action sheet: an ordered list of actions plus a visually separated cancel
/// slot at the bottom.
#[derive(Debug, Clone)]
pub struct SheetDialog {
    descriptor: DialogDescriptor,
    cursor: SheetCursor,
}

impl SheetDialog {
    /// Create the widget for a sheet descriptor. The cursor starts on the
    /// first enabled main action, falling back to the cancel slot.
    pub fn new(descriptor: DialogDescriptor) -> Self {
        let cursor = descriptor
            .actions()
            .actions()
            .iter()
            .position(Action::is_enabled)
            .map(SheetCursor::Action)
            .unwrap_or(SheetCursor::Cancel);

        Self { descriptor, cursor }
    }

    pub fn descriptor(&self) -> &DialogDescriptor {
        &self.descriptor
    }

    pub fn cursor(&self) -> SheetCursor {
        self.cursor
    }

    fn cancel_selectable(&self) -> bool {
        self.descriptor.cancel().is_some_and(|c| c.is_enabled())
    }

    /// Handle a key event. Returns the outcome once one is reached.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SheetOutcome> {
        match key.code {
            KeyCode::Enter => match self.cursor {
                SheetCursor::Action(index) => {
                    let enabled = self
                        .descriptor
                        .actions()
                        .get(index)
                        .is_some_and(Action::is_enabled);
                    enabled.then_some(SheetOutcome::Selected(index))
                }
                SheetCursor::Cancel => Some(SheetOutcome::Cancelled),
            },
            KeyCode::Esc => Some(SheetOutcome::Cancelled),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.move_down();
                None
            }
            _ => None,
        }
    }

    fn move_up(&mut self) {
        let actions = self.descriptor.actions().actions();
        let from = match self.cursor {
            SheetCursor::Action(index) => index,
            SheetCursor::Cancel => actions.len(),
        };
        if let Some(prev) = actions
            .iter()
            .enumerate()
            .take(from)
            .rev()
            .find(|(_, a)| a.is_enabled())
        {
            self.cursor = SheetCursor::Action(prev.0);
        }
    }

    fn move_down(&mut self) {
        let actions = self.descriptor.actions().actions();
        let from = match self.cursor {
            SheetCursor::Action(index) => index + 1,
            SheetCursor::Cancel => return,
        };
        if let Some(next) = actions
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, a)| a.is_enabled())
        {
            self.cursor = SheetCursor::Action(next.0);
        } else if self.cancel_selectable() {
            self.cursor = SheetCursor::Cancel;
        }
    }

    /// Render the sheet hugging the bottom of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = 56.min(area.width.saturating_sub(4)).max(20);
        let actions = self.descriptor.actions().actions();

        let header_height =
            u16::from(self.descriptor.has_title()) + u16::from(self.descriptor.has_message());
        let cancel_height = if self.descriptor.cancel().is_some() { 3 } else { 0 };
        let height = (2 + header_height + actions.len() as u16 + cancel_height)
            .min(area.height.saturating_sub(1));

        let sheet_area = bottom_rect(width, height, area);
        frame.render_widget(Clear, sheet_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2 + header_height + actions.len() as u16),
                Constraint::Length(cancel_height),
            ])
            .split(sheet_area);

        self.render_main(frame, chunks[0], theme);
        if self.descriptor.cancel().is_some() {
            self.render_cancel(frame, chunks[1], theme);
        }
    }

    fn render_main(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .style(ratatui::style::Style::default().bg(theme.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        if self.descriptor.has_title() {
            lines.push(Line::from(Span::styled(
                self.descriptor.title(),
                theme.message_style(),
            )));
        }
        if self.descriptor.has_message() {
            lines.push(Line::from(Span::styled(
                self.descriptor.message(),
                theme.message_style(),
            )));
        }
        for (index, action) in self.descriptor.actions().actions().iter().enumerate() {
            lines.push(self.action_line(index, action, theme));
        }

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }

    fn render_cancel(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(cancel) = self.descriptor.cancel() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .style(ratatui::style::Style::default().bg(theme.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut style = if cancel.is_enabled() {
            theme.action_style().add_modifier(ratatui::style::Modifier::BOLD)
        } else {
            theme.disabled_style()
        };
        if self.cursor == SheetCursor::Cancel {
            style = style.add_modifier(ratatui::style::Modifier::REVERSED);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(cancel.label(), style)))
                .alignment(Alignment::Center),
            inner,
        );
    }

    fn action_line<'a>(&self, index: usize, action: &'a Action, theme: &Theme) -> Line<'a> {
        let mut style = if !action.is_enabled() {
            theme.disabled_style()
        } else if action.is_destructive() {
            theme.destructive_style()
        } else {
            theme.action_style()
        };
        if action.is_default() {
            style = style.add_modifier(ratatui::style::Modifier::BOLD);
        }
        if self.cursor == SheetCursor::Action(index) {
            style = style.add_modifier(ratatui::style::Modifier::REVERSED);
        }
        Line::from(Span::styled(action.label(), style))
    }
}
