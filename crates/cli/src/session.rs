//! Interactive session: role menu, customer menu and staff menu.
//!
//! The session owns the only [`TellerService`] for the lifetime of the
//! process. All input is line based; closing stdin ends the session the same
//! way the Exit choice does.

use crate::constants::*;
use crate::input::{Input, Prompter};
use crate::menu::{CustomerChoice, Role, StaffChoice};
use crate::render;
use bankqueue_core::application::{DeleteOutcome, PositionLookup, TellerService};
use bankqueue_core::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Presentation settings for one session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub branch: String,
    pub json_summary: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            json_summary: false,
        }
    }
}

/// Whether the user is still at the keyboard after a sub-menu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Closed,
}

pub struct Session<R, W> {
    service: TellerService,
    prompter: Prompter<R, W>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, options: SessionOptions) -> Self {
        Self {
            service: TellerService::new(),
            prompter: Prompter::new(reader, writer),
            options,
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let banner = format!("=== {} Queue System ===", self.options.branch);
            render::menu(self.prompter.writer(), &banner, ROLE_MENU)?;

            let choice = match self.prompter.read_number::<i64>(ROLE_PROMPT)? {
                Input::Value(n) => n,
                Input::Malformed => {
                    render::failure(self.prompter.writer(), ROLE_INVALID_INPUT)?;
                    continue;
                }
                Input::Eof => break,
            };

            let flow = match Role::from_choice(choice) {
                Some(Role::Exit) => break,
                Some(Role::Customer) => {
                    debug!("customer menu");
                    self.customer_menu()?
                }
                Some(Role::Staff) => {
                    debug!("staff menu");
                    self.staff_menu()?
                }
                None => {
                    render::notice(self.prompter.writer(), ROLE_INVALID_CHOICE)?;
                    Flow::Back
                }
            };

            if flow == Flow::Closed {
                break;
            }
        }

        writeln!(self.prompter.writer(), "{}", GOODBYE)?;
        self.prompter.writer().flush()?;
        info!(
            issued = self.service.snapshot().last_issued,
            "session closed"
        );
        Ok(())
    }

    fn customer_menu(&mut self) -> Result<Flow> {
        loop {
            render::menu(self.prompter.writer(), CUSTOMER_MENU_TITLE, CUSTOMER_MENU)?;

            let choice = match self.prompter.read_number::<i64>(MENU_PROMPT)? {
                Input::Value(n) => n,
                Input::Malformed => {
                    render::failure(self.prompter.writer(), INVALID_INPUT)?;
                    continue;
                }
                Input::Eof => return Ok(Flow::Closed),
            };

            let flow = match CustomerChoice::from_choice(choice) {
                Some(CustomerChoice::Back) => return Ok(Flow::Back),
                Some(CustomerChoice::QueueMe) => self.queue_me()?,
                Some(CustomerChoice::CheckQueue) => self.check_queue()?,
                None => {
                    render::notice(self.prompter.writer(), INVALID_CHOICE)?;
                    Flow::Back
                }
            };

            if flow == Flow::Closed {
                return Ok(Flow::Closed);
            }
        }
    }

    fn queue_me(&mut self) -> Result<Flow> {
        let Some(name) = self.prompter.read_line(NAME_PROMPT)? else {
            return Ok(Flow::Closed);
        };

        match self.service.issue(&name) {
            Ok(token) => {
                let msg = format!(
                    "Hello {}, your token is: {}",
                    token.holder_name(),
                    token.number()
                );
                render::success(self.prompter.writer(), &msg)?;
            }
            Err(e) if e.is_invalid_name() => {
                render::failure(self.prompter.writer(), NAME_REQUIRED)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Back)
    }

    fn check_queue(&mut self) -> Result<Flow> {
        self.show_summary()?;

        let wants_position = match self.prompter.confirm(CHECK_POSITION_PROMPT)? {
            Input::Value(yes) => yes,
            Input::Malformed => false,
            Input::Eof => return Ok(Flow::Closed),
        };
        if !wants_position {
            return Ok(Flow::Back);
        }

        let number = match self.prompter.read_number(TOKEN_PROMPT)? {
            Input::Value(n) => n,
            Input::Malformed => {
                render::failure(self.prompter.writer(), INVALID_TOKEN)?;
                return Ok(Flow::Back);
            }
            Input::Eof => return Ok(Flow::Closed),
        };

        let w = self.prompter.writer();
        match self.service.check_position(number) {
            PositionLookup::AlreadyServed => {
                let msg = format!("Token {} is already served or skipped.", number);
                render::notice(w, &msg)?;
            }
            PositionLookup::NotInQueue => render::notice(w, NOT_IN_QUEUE)?,
            PositionLookup::Waiting { position, ahead } => {
                let msg = format!(
                    "Your position: {} (tokens before you: {})",
                    position, ahead
                );
                render::success(w, &msg)?;
            }
        }
        Ok(Flow::Back)
    }

    fn staff_menu(&mut self) -> Result<Flow> {
        loop {
            render::menu(self.prompter.writer(), STAFF_MENU_TITLE, STAFF_MENU)?;

            let choice = match self.prompter.read_number::<i64>(MENU_PROMPT)? {
                Input::Value(n) => n,
                Input::Malformed => {
                    render::failure(self.prompter.writer(), INVALID_INPUT)?;
                    continue;
                }
                Input::Eof => return Ok(Flow::Closed),
            };

            match StaffChoice::from_choice(choice) {
                Some(StaffChoice::Back) => return Ok(Flow::Back),
                Some(StaffChoice::ServeNext) => self.serve_next()?,
                Some(StaffChoice::DeleteToken) => {
                    if self.delete_token()? == Flow::Closed {
                        return Ok(Flow::Closed);
                    }
                }
                Some(StaffChoice::ShowSummary) => {
                    self.show_summary()?;
                    render::pending_table(self.prompter.writer(), self.service.pending())?;
                }
                None => render::notice(self.prompter.writer(), INVALID_CHOICE)?,
            }
        }
    }

    fn serve_next(&mut self) -> Result<()> {
        match self.service.serve_next() {
            Ok(token) => {
                let msg = format!(
                    "Serving token {} | Name: {}",
                    token.number(),
                    token.holder_name()
                );
                render::success(self.prompter.writer(), &msg)
            }
            Err(e) if e.is_queue_empty() => {
                render::notice(self.prompter.writer(), NOTHING_TO_SERVE)
            }
            Err(e) => Err(e),
        }
    }

    fn delete_token(&mut self) -> Result<Flow> {
        let number = match self.prompter.read_number(DELETE_PROMPT)? {
            Input::Value(n) => n,
            Input::Malformed => {
                render::failure(self.prompter.writer(), INVALID_INPUT)?;
                return Ok(Flow::Back);
            }
            Input::Eof => return Ok(Flow::Closed),
        };

        let w = self.prompter.writer();
        match self.service.delete(number) {
            DeleteOutcome::Refused => render::failure(w, DELETE_REFUSED)?,
            DeleteOutcome::Removed => render::success(w, &format!("Token {} removed.", number))?,
            DeleteOutcome::NotFound => render::notice(w, &format!("Token {} not found.", number))?,
        }
        Ok(Flow::Back)
    }

    fn show_summary(&mut self) -> Result<()> {
        let snapshot = self.service.snapshot();
        render::summary(self.prompter.writer(), &snapshot)?;
        if self.options.json_summary {
            render::json_summary(self.prompter.writer(), &snapshot)?;
        }
        Ok(())
    }
}
