//! Blanket builder flow: size, border, confirmation, materials.

use std::io::{BufRead, Write};

use super::console::{answer, Answer, Console};
use super::steps;
use super::WizardError;
use crate::config::Settings;
use crate::render;

/// Run the builder. Returns `Back` to go to the main menu, `Quit` to exit.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<Answer<()>, WizardError> {
    log::info!("starting blanket builder");
    console.say("\n(Type 'b' at any prompt to go back, 'q' to quit)")?;

    let unit = answer!(steps::choose_unit(console, settings.default_unit)?);

    // Back from the confirmation, or a "no", restarts at the size question.
    let plan = loop {
        let selection = answer!(steps::ask_size(console, unit)?);
        let (border, included) = answer!(steps::ask_border_and_inclusion(console)?);

        match steps::confirm(console, unit, selection, border, included)? {
            Answer::Value(Some(plan)) => break plan,
            Answer::Value(None) => console.say("\nOkay — let’s try again.\n")?,
            Answer::Back => continue,
            Answer::Quit => return Ok(Answer::Quit),
        }
    };

    log::info!(
        "plan: body {} in, overall {} in, yardage {}",
        plan.body,
        plan.overall_size(),
        plan.yardage()
    );

    console.say(&format!("\nSelected: {}", plan.selection.source))?;
    console.show(&render::materials(&settings.render, &plan))?;
    console.show(&render::demo_pattern(settings.render.style))?;

    steps::return_to_menu(console)
}
