//! Interactive wizard: main menu and the two guided flows.
//!
//! All numbers reach the estimation module already parsed and converted to
//! inches. Navigation is carried by [`Answer`]: `b` returns to the main
//! menu, `q` ends the session from any prompt.

mod builder;
mod console;
mod photo;
mod steps;

pub use console::{Answer, Console};

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::detect::{detect_from_photo, Detection};
use crate::render;

/// Errors that end a wizard session.
///
/// Bad answers are never errors; they are reprompted.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RecreateFromPhoto,
    BlanketBuilder,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(MenuChoice::RecreateFromPhoto),
            "2" => Some(MenuChoice::BlanketBuilder),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// One interactive session.
pub struct Wizard<R, W> {
    console: Console<R, W>,
    settings: Settings,
    detection: Detection,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            console: Console::new(input, output),
            settings,
            detection: detect_from_photo(),
        }
    }

    /// Replace the photo detection result used by the demo flow.
    pub fn with_detection(mut self, detection: Detection) -> Self {
        self.detection = detection;
        self
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), WizardError> {
        self.console.show(&render::heading("CraftLogic: Crochet"))?;
        self.console
            .say(&format!("Style: {}", self.settings.render.style))?;

        loop {
            self.console.show(&format!("\n{}", render::heading("MAIN MENU")))?;
            self.console.say("  1 = Recreate from photo")?;
            self.console.say("  2 = Blanket Builder")?;
            self.console.say("  q = Quit")?;
            self.console
                .say("  (Tip: you can type 'b' inside modes to return here)")?;

            let Some(raw) = self.console.read_line("Choose 1, 2, or q: ")? else {
                break;
            };
            if raw.is_empty() {
                continue;
            }

            let outcome = match MenuChoice::parse(&raw) {
                Some(MenuChoice::Quit) => break,
                Some(MenuChoice::RecreateFromPhoto) => {
                    photo::run(&mut self.console, &self.settings, &self.detection)?
                }
                Some(MenuChoice::BlanketBuilder) => {
                    builder::run(&mut self.console, &self.settings)?
                }
                None => {
                    self.console.say("Please type 1, 2, or q.\n")?;
                    continue;
                }
            };

            if outcome == Answer::Quit {
                break;
            }
            log::debug!("returned to main menu");
        }

        log::info!("session ended");
        self.console.say("\nGoodbye!")?;
        Ok(())
    }

    /// Consume the wizard and hand back its output writer.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
