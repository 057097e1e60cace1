//! Selection summaries and the materials block.

use super::style::RenderSettings;
use crate::measure::{BorderSpec, Dimensions, ProjectPlan, Unit};

/// Section title underlined to its own width.
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(title.chars().count()))
}

/// "Border: ..." plus the inclusion line.
pub fn border_lines(border: &BorderSpec, finished_includes_border: bool) -> String {
    if border.is_none() {
        return "Border: none\nFinished size includes border: n/a\n".to_string();
    }
    format!(
        "Border: {}\nFinished size includes border: {}\n",
        border,
        yes_no(finished_includes_border)
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Warning shown when the border leaves no body to stitch.
pub fn border_too_large_warning() -> String {
    "\n⚠️ That border is too large for the finished size you entered.\n\
     Try a smaller border width or a larger blanket size.\n\n"
        .to_string()
}

fn confirmation_header(
    unit: Unit,
    finished: Dimensions,
    border: &BorderSpec,
    finished_includes_border: bool,
) -> String {
    let mut out = String::from("\n");
    out.push_str(&heading("CONFIRM SELECTION"));
    out.push_str(&format!("Units for custom input: {}\n", unit));
    out.push_str(&format!("Finished size entered: {} in\n", finished));
    out.push_str(&border_lines(border, finished_includes_border));
    out
}

/// The builder's confirmation summary for a valid plan.
pub fn confirmation(unit: Unit, plan: &ProjectPlan) -> String {
    let mut out = confirmation_header(
        unit,
        plan.finished(),
        &plan.border,
        plan.finished_includes_border,
    );
    out.push_str(&format!("Body size (main stitch area): {} in\n", plan.body));
    out.push_str("Type 'b' to go back or 'q' to quit.\n\n");
    out
}

/// The confirmation summary when the border leaves no body, ending in
/// [`border_too_large_warning`] instead of a body size.
pub fn confirmation_border_too_large(
    unit: Unit,
    finished: Dimensions,
    border: &BorderSpec,
    finished_includes_border: bool,
) -> String {
    let mut out = confirmation_header(unit, finished, border, finished_includes_border);
    out.push_str(&border_too_large_warning());
    out
}

/// Materials list with body size, overall size, and yardage estimate.
pub fn materials(settings: &RenderSettings, plan: &ProjectPlan) -> String {
    let mut out = String::from("\n");
    out.push_str(&heading("MATERIALS"));
    out.push_str(&format!("Finished size entered: {} in\n", plan.finished()));
    out.push_str(&border_lines(&plan.border, plan.finished_includes_border));
    out.push_str(&format!("Body size: {} in\n", plan.body));
    if !plan.border.is_none() {
        out.push_str(&format!(
            "Overall size with border: {} in\n",
            plan.overall_size()
        ));
    }
    out.push_str(&format!("Estimated yardage (v1): {}\n", plan.yardage()));
    out.push_str(&format!("Yarn: {}\n", settings.materials.yarn));
    out.push_str(&format!("Hook: {}\n", settings.materials.hook));
    out.push_str("Notions: scissors, tapestry needle\n");
    out.push_str("Optional: stitch markers, measuring tape\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{BorderKind, Preset, SizeSelection};

    #[test]
    fn test_heading_underline_matches() {
        assert_eq!(heading("BORDER"), "BORDER\n------\n");
    }

    #[test]
    fn test_border_lines_none() {
        assert_eq!(
            border_lines(&BorderSpec::none(), true),
            "Border: none\nFinished size includes border: n/a\n"
        );
    }

    #[test]
    fn test_border_lines_custom() {
        let border = BorderSpec::new(BorderKind::Custom, 1.5).describe("crab stitch");
        assert_eq!(
            border_lines(&border, false),
            "Border: custom (1.5 in) — crab stitch\nFinished size includes border: no\n"
        );
    }

    #[test]
    fn test_confirmation_border_too_large() {
        let border = BorderSpec::new(BorderKind::Simple, 30.0);
        let text = confirmation_border_too_large(Unit::In, Preset::Throw.dimensions(), &border, true);
        assert!(text.contains("Finished size entered: 50 × 60 in"));
        assert!(text.contains("too large"));
        assert!(!text.contains("Body size"));
    }

    #[test]
    fn test_materials_lists_yardage() {
        let plan = ProjectPlan::new(
            SizeSelection::from_preset(Preset::Throw),
            BorderSpec::none(),
            true,
        )
        .unwrap();
        let text = materials(&RenderSettings::default(), &plan);
        assert!(text.contains("Body size: 50 × 60 in"));
        assert!(!text.contains("Overall size with border"));
        assert!(text.contains("Estimated yardage (v1): 1050–1650 yd"));
        assert!(text.contains("Yarn: Worsted weight (#4)"));
    }

    #[test]
    fn test_materials_shows_overall_size() {
        let plan = ProjectPlan::new(
            SizeSelection::from_preset(Preset::Throw),
            BorderSpec::new(BorderKind::Simple, 2.0),
            false,
        )
        .unwrap();
        let text = materials(&RenderSettings::default(), &plan);
        assert!(text.contains("Body size: 50 × 60 in"));
        assert!(text.contains("Overall size with border: 54 × 64 in"));
        assert!(text.contains("Estimated yardage (v1): 1150–1850 yd"));
    }
}
