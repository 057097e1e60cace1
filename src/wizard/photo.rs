//! Recreate-from-photo demo flow.
//!
//! Detection is stubbed; a granny square leads to a square pattern and a
//! blanket layout plan.

use std::io::{BufRead, Write};

use super::console::{answer, Answer, Console};
use super::steps;
use super::WizardError;
use crate::config::Settings;
use crate::detect::Detection;
use crate::measure::ProjectPlan;
use crate::render;

/// Run the demo. Returns `Back` to go to the main menu, `Quit` to exit.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
    detection: &Detection,
) -> Result<Answer<()>, WizardError> {
    log::info!("starting recreate-from-photo demo");
    console.say("\n(Type 'b' at any prompt to go back, 'q' to quit)")?;
    console.show(&format!("\n{}", render::heading("RECREATE FROM PHOTO (demo)")))?;
    console.say("Pretending the user uploaded a photo...")?;
    console.say(&format!("Detected: {}", detection))?;

    if !detection.is_supported() {
        log::info!("no plan available for detected pattern {}", detection.pattern);
        console.say("Sorry — this pattern type isn’t supported yet.\n")?;
        return steps::return_to_menu(console);
    }

    let square_in = answer!(steps::ask_square_size(console)?);
    let unit = answer!(steps::choose_unit(console, settings.default_unit)?);

    console.show(&format!("\n{}", render::heading("PROJECT: BLANKET SIZE")))?;
    console.say("Choose the blanket size you want to make with granny squares.")?;
    let selection = answer!(steps::ask_size(console, unit)?);
    let (border, finished_includes_border) = answer!(steps::ask_border_and_inclusion(console)?);

    console.show(&render::granny_square(&settings.render, square_in))?;
    match ProjectPlan::new(selection, border, finished_includes_border) {
        Ok(plan) => console.show(&render::granny_plan(&plan, square_in))?,
        Err(e) => {
            log::info!("plan aborted: {}", e);
            console.show(&render::granny_plan_border_too_large(&selection, square_in))?;
        }
    }

    steps::return_to_menu(console)
}
