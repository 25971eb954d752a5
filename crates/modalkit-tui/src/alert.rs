//! Centered alert dialog widget.

use crossterm::event::{KeyCode, KeyEvent};
use modalkit_core::{Action, DialogDescriptor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::common::centered_rect;
use crate::theme::Theme;

/// What a key event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// The action at this index was chosen.
    Selected(usize),
    /// The user asked to dismiss without choosing (Esc / outside tap).
    /// Whether that is honored is the controller's call, not the widget's.
    DismissRequested,
}

/// Forced-choice alert: title, message, and an action row or column.
///
/// Pure view/input state; delivery stays with the presentation controller.
#[derive(Debug, Clone)]
pub struct AlertDialog {
    descriptor: DialogDescriptor,
    /// Index of the action under the selection cursor.
    selected: usize,
}

impl AlertDialog {
    /// Create the widget for an alert descriptor. The cursor starts on the
    /// default action when there is a selectable one, otherwise on the first
    /// enabled action.
    pub fn new(descriptor: DialogDescriptor) -> Self {
        let selected = descriptor
            .actions()
            .default_index()
            .filter(|&i| descriptor.actions().get(i).is_some_and(Action::is_enabled))
            .or_else(|| {
                descriptor
                    .actions()
                    .actions()
                    .iter()
                    .position(Action::is_enabled)
            })
            .unwrap_or(0);

        Self {
            descriptor,
            selected,
        }
    }

    pub fn descriptor(&self) -> &DialogDescriptor {
        &self.descriptor
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handle a key event. Returns the outcome once one is reached.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AlertOutcome> {
        match key.code {
            KeyCode::Enter => {
                let enabled = self
                    .descriptor
                    .actions()
                    .get(self.selected)
                    .is_some_and(Action::is_enabled);
                enabled.then_some(AlertOutcome::Selected(self.selected))
            }
            KeyCode::Esc => Some(AlertOutcome::DismissRequested),
            KeyCode::Left | KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.move_selection(-1);
                None
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.move_selection(1);
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                if !self.current_enabled() {
                    self.move_selection(1);
                }
                None
            }
            KeyCode::End => {
                self.selected = self.descriptor.actions().len().saturating_sub(1);
                if !self.current_enabled() {
                    self.move_selection(-1);
                }
                None
            }
            _ => None,
        }
    }

    fn current_enabled(&self) -> bool {
        self.descriptor
            .actions()
            .get(self.selected)
            .is_some_and(Action::is_enabled)
    }

    /// Step the cursor in `direction`, skipping disabled actions and wrapping
    /// around the ends.
    fn move_selection(&mut self, direction: isize) {
        let len = self.descriptor.actions().len();
        if len == 0 {
            return;
        }
        let mut index = self.selected;
        for _ in 0..len {
            index = (index as isize + direction).rem_euclid(len as isize) as usize;
            if self
                .descriptor
                .actions()
                .get(index)
                .is_some_and(Action::is_enabled)
            {
                self.selected = index;
                return;
            }
        }
    }

    /// Render the alert centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = 44.min(area.width.saturating_sub(4)).max(20);
        let inner_width = width.saturating_sub(2) as usize;

        let title_height = if self.descriptor.has_title() { 1 } else { 0 };
        let message_height = if self.descriptor.has_message() {
            let chars = self.descriptor.message().chars().count();
            (chars.div_ceil(inner_width.max(1)) as u16).min(5)
        } else {
            0
        };
        let actions = self.descriptor.actions().actions();
        let action_height = if actions.len() == 2 { 1 } else { actions.len() as u16 };
        let height = (2 + title_height + message_height + action_height + 1)
            .min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .style(ratatui::style::Style::default().bg(theme.background));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Length(message_height),
                Constraint::Length(1),
                Constraint::Min(action_height),
            ])
            .split(inner);

        if self.descriptor.has_title() {
            let title = Paragraph::new(self.descriptor.title())
                .style(theme.title_style())
                .alignment(Alignment::Center);
            frame.render_widget(title, chunks[0]);
        }
        if self.descriptor.has_message() {
            let message = Paragraph::new(self.descriptor.message())
                .style(theme.message_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(message, chunks[1]);
        }

        // Two actions sit side by side, any other count stacks vertically.
        if actions.len() == 2 {
            let row = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[3]);
            for (index, action) in actions.iter().enumerate() {
                let line = self.action_line(index, action, theme);
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center),
                    row[index],
                );
            }
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(1); actions.len()])
                .split(chunks[3]);
            for (index, action) in actions.iter().enumerate() {
                let line = self.action_line(index, action, theme);
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center),
                    rows[index],
                );
            }
        }
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
        if index == self.selected {
            style = style.add_modifier(ratatui::style::Modifier::REVERSED);
        }
        Line::from(Span::styled(action.label(), style))
    }
}
