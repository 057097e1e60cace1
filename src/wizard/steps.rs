//! Individual wizard questions.
//!
//! Each step reprompts until it gets a valid answer, or returns the user's
//! back/quit request.

use std::io::{BufRead, Write};

use super::console::{answer, Answer, Console};
use super::WizardError;
use crate::measure::{
    format_measure, BorderKind, BorderSpec, Preset, ProjectPlan, SizeSelection, Unit,
};
use crate::render;

const NAV_HINT: &str = "Type 'b' to go back or 'q' to quit.\n";

/// Ask whether to change the unit used for custom dimensions.
pub fn choose_unit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default_unit: Unit,
) -> Result<Answer<Unit>, WizardError> {
    console.say(&format!(
        "\nDefault unit is {} ({}).",
        default_unit.name(),
        if default_unit == Unit::In {
            "industry standard"
        } else {
            "from your settings"
        }
    ))?;
    console.say(NAV_HINT)?;

    loop {
        let raw = answer!(console.prompt("Do you want to change the unit for CUSTOM dimensions? (y/n): ")?);
        match raw.to_lowercase().as_str() {
            "n" => return Ok(Answer::Value(default_unit)),
            "y" => break,
            _ => console.say("Please type 'y' or 'n' (or 'b' to go back, 'q' to quit).\n")?,
        }
    }

    loop {
        let raw = answer!(console.prompt("Choose unit (in / ft / cm / m): ")?);
        match raw.to_lowercase().parse::<Unit>() {
            Ok(unit) => {
                log::debug!("custom unit set to {}", unit);
                return Ok(Answer::Value(unit));
            }
            Err(e) => {
                log::debug!("rejected unit: {}", e);
                console.say("Please type: in, ft, cm, or m (or 'b' to go back, 'q' to quit).\n")?;
            }
        }
    }
}

/// Ask for a preset name or custom dimensions in `unit`.
pub fn ask_size<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    unit: Unit,
) -> Result<Answer<SizeSelection>, WizardError> {
    let presets: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
    console.say("\nChoose a size preset OR type custom dimensions:")?;
    console.say(&format!("Presets: {}", presets.join(" / ")))?;
    console.say("Custom examples: \"52x68\" or \"4x5\" (uses your selected unit for custom)")?;
    console.say(NAV_HINT)?;

    loop {
        let raw = answer!(console.prompt("Enter size: ")?);
        match SizeSelection::resolve(&raw, unit) {
            Ok(selection) => {
                log::debug!("size {} in from {}", selection.size, selection.source);
                return Ok(Answer::Value(selection));
            }
            Err(e) => {
                log::debug!("rejected size {:?}: {}", raw, e);
                console.say("Try \"throw\" or dimensions like \"52x68\" (or b/q).\n")?;
            }
        }
    }
}

/// Ask for a border style, an optional description, and its width.
pub fn ask_border<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answer<BorderSpec>, WizardError> {
    console.show(&format!("\n{}", render::heading("BORDER")))?;
    console.say("Choose a border style:")?;
    for kind in BorderKind::ALL {
        console.say(&format!("  {} = {}", kind.menu_index(), kind.description()))?;
    }
    console.say(NAV_HINT)?;

    let kind = loop {
        let raw = answer!(console.prompt("Choose 0 / 1 / 2 / 3 / 4 / 5: ")?);
        match BorderKind::from_choice(&raw) {
            Some(kind) => break kind,
            None => console.say("Please type 0, 1, 2, 3, 4, or 5 (or b/q).\n")?,
        }
    };

    if kind == BorderKind::None {
        return Ok(Answer::Value(BorderSpec::none()));
    }

    let description = if kind == BorderKind::Custom {
        answer!(console.prompt("Describe your border (short): ")?)
    } else {
        String::new()
    };

    let default_width = kind.default_width();
    let question = format!(
        "Border width in inches (press Enter for {}): ",
        format_measure(default_width)
    );
    let width = loop {
        let raw = answer!(console.prompt(&question)?);
        if raw.is_empty() {
            break default_width;
        }
        match raw.parse::<f64>() {
            Ok(w) if w.is_finite() && w > 0.0 => break w,
            _ => console.say("Please enter a positive number, e.g. 2 or 3.5 (or b/q).\n")?,
        }
    };

    let border = BorderSpec::new(kind, width).describe(description);
    log::debug!("border chosen: {}", border);
    Ok(Answer::Value(border))
}

/// Ask whether the finished size already counts the border.
pub fn ask_border_included<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answer<bool>, WizardError> {
    console.show(&format!("\n{}", render::heading("FINISHED SIZE QUESTION")))?;
    console.say("Does your FINISHED size include the border?")?;
    console.say("  1 = Yes (the size you entered includes the border)")?;
    console.say("  2 = No  (the border will add to the size you entered)")?;
    console.say(NAV_HINT)?;

    loop {
        let raw = answer!(console.prompt("Choose 1 or 2: ")?);
        match raw.as_str() {
            "1" => return Ok(Answer::Value(true)),
            "2" => return Ok(Answer::Value(false)),
            _ => console.say("Please type 1 or 2 (or b/q).\n")?,
        }
    }
}

/// Border plus, when there is one, the inclusion question.
///
/// With no border the finished size trivially includes it.
pub fn ask_border_and_inclusion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answer<(BorderSpec, bool)>, WizardError> {
    let border = answer!(ask_border(console)?);
    if border.is_none() {
        return Ok(Answer::Value((border, true)));
    }
    let included = answer!(ask_border_included(console)?);
    Ok(Answer::Value((border, included)))
}

/// Build the plan, show it, and ask to continue.
///
/// Returns `Value(Some(plan))` to go ahead and `Value(None)` to start over.
/// An infeasible border shows a warning and counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    unit: Unit,
    selection: SizeSelection,
    border: BorderSpec,
    finished_includes_border: bool,
) -> Result<Answer<Option<ProjectPlan>>, WizardError> {
    let plan = match ProjectPlan::new(selection, border.clone(), finished_includes_border) {
        Ok(plan) => plan,
        Err(e) => {
            log::info!("selection rejected: {}", e);
            console.show(&render::confirmation_border_too_large(
                unit,
                selection.size,
                &border,
                finished_includes_border,
            ))?;
            return Ok(Answer::Value(None));
        }
    };
    console.show(&render::confirmation(unit, &plan))?;

    loop {
        let raw = answer!(console.prompt("Continue? (y/n): ")?);
        match raw.to_lowercase().as_str() {
            "y" => return Ok(Answer::Value(Some(plan))),
            "n" => return Ok(Answer::Value(None)),
            _ => console.say("Please type 'y' or 'n' (or b/q).\n")?,
        }
    }
}

/// Ask for the target granny square size in inches.
pub fn ask_square_size<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answer<f64>, WizardError> {
    console.show(&format!("\n{}", render::heading("GRANNY SQUARE SIZE")))?;
    console.say("Enter square size in inches (e.g., 6, 8, 10)")?;
    console.say(NAV_HINT)?;

    loop {
        let raw = answer!(console.prompt("Size: ")?);
        match raw.parse::<f64>() {
            Ok(size) if size.is_finite() && size > 0.0 => return Ok(Answer::Value(size)),
            _ => console.say("Please enter a positive number (or b/q).\n")?,
        }
    }
}

/// Final pause at the end of a flow. Only `q` quits; anything else goes back.
pub fn return_to_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answer<()>, WizardError> {
    match console.prompt("Press Enter to return to the main menu (or q to quit): ")? {
        Answer::Quit => Ok(Answer::Quit),
        _ => Ok(Answer::Back),
    }
}
