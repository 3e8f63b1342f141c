use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, info};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;

use crate::config::Config;
use crate::form::{ContactForm, SubmitStart};
use crate::transport::SubmitError;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactState, draw_contact};
use super::widgets::{Notice, draw_status_bar};

/// How long the loop waits for a key before checking for a finished submission.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level application state.
///
/// The form lives on the UI thread. Its transport call runs on the tokio
/// runtime behind `runtime` and reports back through a channel.
pub struct App {
    config: Config,
    runtime: Handle,
    contact: ContactState,
    results_tx: Sender<Result<(), SubmitError>>,
    results_rx: Receiver<Result<(), SubmitError>>,
    notices_tx: Sender<Notice>,
    notices_rx: Receiver<Notice>,
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with a freshly mounted form.
    pub fn new(config: Config, runtime: Handle) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        let (notices_tx, notices_rx) = mpsc::channel();
        let contact = mount(&config, &notices_tx);
        Self {
            config,
            runtime,
            contact,
            results_tx,
            results_rx,
            notices_tx,
            notices_rx,
            notice: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll key → dispatch → collect finished submissions.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.poll_submission();
        }
        Ok(())
    }

    /// Renders the contact screen with the status bar below it.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        draw_contact(&self.contact, frame, main);
        draw_status_bar(self.notice.as_ref(), frame, status);
    }

    /// Handles a key event by routing it to the contact screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.contact.handle_key(key) {
            Action::None => {}
            Action::Submit => self.start_submission(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Validates the form and, if it passes, runs the call on the runtime.
    fn start_submission(&mut self) {
        match self.contact.form_mut().begin_submit() {
            SubmitStart::Started(pending) => {
                self.notice = None;
                let tx = self.results_tx.clone();
                self.runtime.spawn(async move {
                    // The receiver is gone only if the app has quit.
                    let _ = tx.send(pending.await);
                });
            }
            SubmitStart::Invalid => {
                self.notice = None;
                debug!("submission blocked by invalid fields");
            }
            SubmitStart::Busy => {}
        }
    }

    /// Completes any finished submission and applies the resulting notice.
    pub fn poll_submission(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.contact.form_mut().finish(result);
        }
        while let Ok(notice) = self.notices_rx.try_recv() {
            if notice == Notice::Sent {
                info!("remounting form after successful submission");
                self.contact = mount(&self.config, &self.notices_tx);
            }
            self.notice = Some(notice);
        }
    }

    pub fn contact(&self) -> &ContactState {
        &self.contact
    }

    /// Returns the outcome of the last submission, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Builds a fresh form whose callbacks report to `notices`.
fn mount(config: &Config, notices: &Sender<Notice>) -> ContactState {
    let on_success = notices.clone();
    let on_error = notices.clone();
    let form = ContactForm::new(config.transport())
        .on_success(move || {
            let _ = on_success.send(Notice::Sent);
        })
        .on_error(move |e| {
            let _ = on_error.send(Notice::Failed(e.to_string()));
        });
    ContactState::new(form, config.categories.clone())
}
