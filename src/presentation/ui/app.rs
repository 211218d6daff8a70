//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::info;

use crate::domain::Dataset;
use crate::infrastructure::AppConfig;
use crate::presentation::events::{self, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::DashboardScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// The running application: one dashboard screen over one dataset.
pub struct App {
    state: AppState,
    screen: DashboardScreen,
}

impl App {
    /// Builds the application around an already-loaded dataset.
    #[must_use]
    pub fn new(dataset: Dataset, dataset_name: String, config: &AppConfig) -> Self {
        let theme = Theme::from_config(config);
        let screen =
            DashboardScreen::new(dataset, dataset_name, theme, config.ui.sidebar_width);
        Self {
            state: AppState::Running,
            screen,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let Some(Ok(event)) = terminal_events.next().await else {
                break;
            };
            match self.handle_terminal_event(&event) {
                EventResult::Exit => self.state = AppState::Exiting,
                EventResult::Redraw => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                EventResult::Continue => {}
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if events::is_quit_event(key) {
                    return EventResult::Exit;
                }
                self.screen.handle_key(key)
            }
            Event::Resize(_, _) => EventResult::Redraw,
            _ => EventResult::Continue,
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.screen, frame.area());
    }
}
