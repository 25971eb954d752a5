//! Demo application: a launcher menu for the canonical dialog scenarios.

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use modalkit_core::{
    Action, ActionList, CancelAction, Choice, ChoiceDispatcher, DialogDescriptor,
    LabelConvention, MemoryHost, Phase, Presentation,
};
use modalkit_tui::{
    is_quit, AlertDialog, AlertOutcome, Event, EventHandler, SheetDialog, SheetOutcome, Theme,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Restore the terminal to a usable state (raw mode off, main screen).
pub fn restore_terminal() {
    // Best effort - we may be inside a panic.
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    let _ = io::stdout().flush();
}

/// Install a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// The launcher scenarios, mirroring the six demo buttons this crate grew out
/// of.
const SCENARIOS: [&str; 6] = [
    "Alert: delete confirmation",
    "Alert: location permission",
    "Alert: four buttons",
    "Alert: buttons only",
    "Action sheet",
    "Action sheet: duplicate labels",
];

enum ActiveDialog {
    Alert {
        presentation: Presentation,
        widget: AlertDialog,
    },
    Sheet {
        presentation: Presentation,
        widget: SheetDialog,
    },
}

pub struct App {
    theme: Theme,
    host: MemoryHost,
    menu_selected: usize,
    active: Option<ActiveDialog>,
    /// Shared with the per-presentation dispatchers.
    results: Arc<Mutex<Vec<String>>>,
    should_quit: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            host: MemoryHost::new(),
            menu_selected: 0,
            active: None,
            results: Arc::new(Mutex::new(Vec::new())),
            should_quit: false,
        }
    }

    pub async fn run<B: ratatui::backend::Backend>(
        mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        let mut events = EventHandler::new();
        let event_loop = events.start();

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Resize(..)) | Some(Event::Tick) => {}
                None => break,
            }
        }

        event_loop.abort();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_quit(&key) {
            self.should_quit = true;
            return;
        }

        match &mut self.active {
            None => self.handle_menu_key(key),
            Some(ActiveDialog::Alert {
                presentation,
                widget,
            }) => {
                match widget.handle_key(key) {
                    Some(AlertOutcome::Selected(index)) => {
                        if let Err(err) = presentation.select(index, &mut self.host) {
                            tracing::error!(%err, "widget produced an invalid selection");
                        }
                    }
                    Some(AlertOutcome::DismissRequested) => {
                        // Plain alerts are must-choose; this is rejected there.
                        presentation.backdrop_dismiss(&mut self.host);
                    }
                    None => {}
                }
                if presentation.phase() == Phase::Dismissed {
                    self.active = None;
                }
            }
            Some(ActiveDialog::Sheet {
                presentation,
                widget,
            }) => {
                match widget.handle_key(key) {
                    Some(SheetOutcome::Selected(index)) => {
                        if let Err(err) = presentation.select(index, &mut self.host) {
                            tracing::error!(%err, "widget produced an invalid selection");
                        }
                    }
                    Some(SheetOutcome::Cancelled) => {
                        presentation.backdrop_dismiss(&mut self.host);
                    }
                    None => {}
                }
                if presentation.phase() == Phase::Dismissed {
                    self.active = None;
                }
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selected = self.menu_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selected = (self.menu_selected + 1).min(SCENARIOS.len() - 1);
            }
            KeyCode::Enter => self.launch(self.menu_selected),
            _ => {}
        }
    }

    fn launch(&mut self, scenario: usize) {
        let descriptor = match Self::descriptor_for(scenario) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                tracing::error!(scenario, %err, "failed to build scenario descriptor");
                return;
            }
        };

        let name = SCENARIOS[scenario];
        let labels: Vec<String> = descriptor
            .actions()
            .actions()
            .iter()
            .map(|a| a.label().to_string())
            .collect();
        let dispatcher = self.dispatcher(name, labels);

        let shown = if descriptor.is_sheet() {
            Presentation::show(descriptor.clone(), dispatcher, &mut self.host).map(|p| {
                ActiveDialog::Sheet {
                    presentation: p,
                    widget: SheetDialog::new(descriptor),
                }
            })
        } else {
            Presentation::show(descriptor.clone(), dispatcher, &mut self.host).map(|p| {
                ActiveDialog::Alert {
                    presentation: p,
                    widget: AlertDialog::new(descriptor),
                }
            })
        };

        match shown {
            Ok(active) => self.active = Some(active),
            Err(err) => tracing::error!(%err, "refusing to show dialog"),
        }
    }

    fn descriptor_for(scenario: usize) -> Result<DialogDescriptor> {
        let descriptor = match scenario {
            0 => DialogDescriptor::alert(
                "Delete file?",
                "",
                ActionList::build(vec![
                    Action::new("Delete").destructive(),
                    Action::new("Cancel").as_default(),
                ])?,
            ),
            1 => DialogDescriptor::alert(
                "Allow \"Maps\" to access your location while you are using the app?",
                "Your current location will be displayed on the map and used for \
                 directions, nearby search results, and estimated travel times.",
                ActionList::from_labels(
                    ["Don't Allow", "Allow"],
                    LabelConvention::LastIsDefault,
                )?,
            ),
            2 => DialogDescriptor::alert(
                "title",
                "message",
                ActionList::from_labels(
                    ["test1", "test2", "test3", "test4"],
                    LabelConvention::LastIsDefault,
                )?,
            ),
            3 => DialogDescriptor::alert(
                "",
                "",
                ActionList::from_labels(
                    ["test1", "test2", "test3", "test4"],
                    LabelConvention::LastIsDefault,
                )?,
            ),
            4 => DialogDescriptor::sheet(
                "title",
                "message",
                ActionList::from_labels(
                    ["test1", "test2", "test3"],
                    LabelConvention::NoDefault,
                )?,
                vec![CancelAction::new("取消").default_dismiss()],
            ),
            _ => DialogDescriptor::sheet(
                "",
                "",
                ActionList::build(vec![
                    Action::new("取消"),
                    Action::new("取消"),
                    Action::new("取消"),
                ])?,
                vec![CancelAction::new("取消")],
            ),
        };
        Ok(descriptor)
    }

    fn dispatcher(&self, name: &'static str, labels: Vec<String>) -> Box<dyn ChoiceDispatcher> {
        let results = self.results.clone();
        Box::new(move |id: &str, choice: Choice| {
            let text = match choice {
                Choice::Action { index } => format!(
                    "{name}: chose \"{}\" (index {index})",
                    labels.get(index).map(String::as_str).unwrap_or("?")
                ),
                Choice::Cancel => format!("{name}: cancelled"),
            };
            tracing::info!(id = %id, "{}", text);
            if let Ok(mut results) = results.lock() {
                results.push(text);
            }
        })
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        // Launcher menu.
        let items: Vec<ListItem> = SCENARIOS
            .iter()
            .map(|name| ListItem::new(Line::from(*name)))
            .collect();
        let mut state = ListState::default();
        state.select(Some(self.menu_selected));
        let menu = List::new(items)
            .block(
                Block::default()
                    .title(" modalkit demo ")
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(menu, chunks[0], &mut state);

        // Delivered choices, newest last.
        let results = match self.results.lock() {
            Ok(results) => results.clone(),
            Err(_) => Vec::new(),
        };
        let start = results.len().saturating_sub(6);
        let lines: Vec<Line> = results[start..]
            .iter()
            .map(|r| Line::from(r.as_str()))
            .collect();
        let log = Paragraph::new(lines)
            .block(Block::default().title(" choices ").borders(Borders::ALL));
        frame.render_widget(log, chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("j/k", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" move  "),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" open  "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);

        // Active dialog on top of everything.
        match &self.active {
            Some(ActiveDialog::Alert { widget, .. }) => {
                widget.render(frame, frame.area(), &self.theme);
            }
            Some(ActiveDialog::Sheet { widget, .. }) => {
                widget.render(frame, frame.area(), &self.theme);
            }
            None => {}
        }
    }
}
