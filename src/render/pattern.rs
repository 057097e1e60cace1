//! Pattern instructions and the granny-square blanket plan.

use super::style::{PatternStyle, RenderSettings};
use super::summary::{border_lines, heading};
use crate::measure::{
    estimate_granny_rounds, estimate_square_layout, format_measure, ProjectPlan, SizeSelection,
};

/// Rows printed by the builder's demo pattern.
const DEMO_ROWS: u32 = 6;

/// Classic granny square instructions for a target size.
pub fn granny_square(settings: &RenderSettings, target_in: f64) -> String {
    let rounds = estimate_granny_rounds(target_in);
    let size = format_measure(target_in);
    let yarn = &settings.materials.yarn;
    let hook = &settings.materials.hook;

    let mut out = String::from("\n");
    out.push_str(&heading("PATTERN: Classic Granny Square"));
    out.push_str(&format!(
        "Target size: ~{} in across (estimate: ~{} rounds)\n",
        size, rounds
    ));

    match settings.style {
        PatternStyle::Beginner => {
            out.push_str(&format!(
                "Materials: {} yarn, {} hook, scissors, tapestry needle.\n",
                yarn, hook
            ));
            out.push_str(
                "Note: Size is approximate—everyone’s tension is different. Measure as you go.\n\n",
            );

            out.push_str("Round 1:\n");
            out.push_str("  1) Make a magic ring (or chain 4 and slip stitch to form a ring).\n");
            out.push_str("  2) Chain 3 (counts as first double crochet).\n");
            out.push_str("  3) Work 2 double crochet into the ring. Chain 2.\n");
            out.push_str("  4) Work 3 double crochet into the ring. Chain 2.\n");
            out.push_str("  5) Repeat Step 4 two more times (4 clusters total).\n");
            out.push_str("  6) Slip stitch to the top of the starting chain 3 to close.\n\n");

            out.push_str("Round 2:\n");
            out.push_str("  1) Slip stitch into the next corner (chain-2) space.\n");
            out.push_str(
                "  2) In the corner space: chain 3, 2 double crochet, chain 2, 3 double crochet.\n",
            );
            out.push_str(
                "  3) In each remaining corner space: (3 double crochet, chain 2, 3 double crochet).\n",
            );
            out.push_str("  4) Slip stitch to close.\n\n");

            out.push_str("Round 3 and beyond:\n");
            out.push_str("  - Corners: (3 double crochet, chain 2, 3 double crochet)\n");
            out.push_str("  - Sides: 3 double crochet in each space between corner clusters\n");
            out.push_str(&format!(
                "  - Repeat rounds until your square measures about {} inches across.\n",
                size
            ));
            out.push_str("  - Fasten off and weave in ends.\n\n");
        }
        PatternStyle::Advanced => {
            out.push_str(&format!("Materials: {}, {} hook.\n\n", short_yarn(yarn), hook));
            out.push_str(&format!("Work until square measures ~{} in across.\n\n", size));
            out.push_str("R1: MR, ch 3 (counts as dc), 2 dc, ch 2, *(3 dc, ch 2) 3x, sl st.\n");
            out.push_str("R2: sl st to corner sp, ch 3, 2 dc, ch 2, 3 dc in same sp;\n");
            out.push_str("    *(3 dc, ch 2, 3 dc) in each corner sp; sl st.\n");
            out.push_str("R3+: corners (3 dc, ch 2, 3 dc); sides 3 dc in each sp between clusters.\n");
            out.push_str("FO. Weave in ends.\n\n");
        }
    }
    out
}

/// Drop a trailing " weight" qualifier: "Worsted weight (#4)" → "Worsted (#4)".
fn short_yarn(yarn: &str) -> String {
    yarn.replacen(" weight", "", 1)
}

fn granny_plan_header(selection: &SizeSelection, square_in: f64) -> String {
    let mut out = String::from("\n");
    out.push_str("PROJECT PLAN: Granny-Square Blanket\n");
    out.push_str("----------------------------------\n");
    out.push_str(&format!(
        "Blanket size entered: {} in ({})\n",
        selection.size, selection.source
    ));
    out.push_str(&format!(
        "Square size target: ~{} in across\n",
        format_measure(square_in)
    ));
    out
}

/// Layout plan for a granny-square blanket.
pub fn granny_plan(plan: &ProjectPlan, square_in: f64) -> String {
    let mut out = granny_plan_header(&plan.selection, square_in);
    out.push_str(&format!("Body size used for square layout: {} in\n", plan.body));

    let layout = estimate_square_layout(plan.body, square_in);
    out.push_str(&format!(
        "Estimated layout: {} squares across × {} squares down = {} squares\n",
        layout.across,
        layout.down,
        layout.total()
    ));
    out.push_str(&format!(
        "Estimated assembled body size (before joins/border tweaks): ~{} in\n",
        layout.assembled()
    ));

    if plan.border.is_none() {
        out.push_str("Border: none\n\n");
    } else {
        out.push_str(&border_lines(&plan.border, plan.finished_includes_border));
        out.push_str(&format!(
            "Overall size with border: {} in\n\n",
            plan.overall_size()
        ));
    }

    out.push_str("Note: This estimate does not include joining gap or blocking.\n");
    out.push_str("      Next upgrade: ask join method and add a join allowance.\n\n");
    out
}

/// Plan header followed by the warning for a border that leaves no body.
pub fn granny_plan_border_too_large(selection: &SizeSelection, square_in: f64) -> String {
    let mut out = granny_plan_header(selection, square_in);
    out.push_str(
        "⚠️ Border is too large for this blanket size. Try a smaller border or larger size.\n\n",
    );
    out
}

/// Short row-by-row demo pattern for the blanket builder.
pub fn demo_pattern(style: PatternStyle) -> String {
    let dc = style.double_crochet();
    let stitches = style.stitches();

    let mut out = heading("PATTERN (demo)");
    for row in 1..=DEMO_ROWS {
        let into = if row % 2 == 1 { stitches } else { "spaces" };
        out.push_str(&format!("Row {}: {} in {} across\n", row, dc, into));
    }
    out.push('\n');
    out
}
