//! Unit tests for text rendering.
//!
//! Renderers are pure: these check wording per style and how estimation
//! failures show up in the output.

use craftlogic::measure::*;
use craftlogic::render::*;

fn settings(style: PatternStyle) -> RenderSettings {
    RenderSettings::new(style)
}

// ==================== Style Tests ====================

#[test]
fn test_style_passed_explicitly() {
    let beginner = demo_pattern(PatternStyle::Beginner);
    let advanced = demo_pattern(PatternStyle::Advanced);
    assert_ne!(beginner, advanced);
    assert!(beginner.contains("double crochet"));
    assert!(!advanced.contains("double crochet"));
}

#[test]
fn test_granny_square_uses_configured_materials() {
    let custom = settings(PatternStyle::Beginner).with_materials(Materials {
        yarn: "Bulky (#5)".to_string(),
        hook: "6.5 mm".to_string(),
    });
    let text = granny_square(&custom, 8.0);
    assert!(text.contains("Materials: Bulky (#5) yarn, 6.5 mm hook"));
    assert!(text.contains("about 8 inches across"));
}

#[test]
fn test_granny_square_small_target() {
    let text = granny_square(&settings(PatternStyle::Advanced), 1.5);
    assert!(text.contains("~1.5 in across (estimate: ~2 rounds)"));
}

// ==================== Materials Tests ====================

fn plan(selection: SizeSelection, border: BorderSpec, included: bool) -> ProjectPlan {
    ProjectPlan::new(selection, border, included).expect("border fits")
}

#[test]
fn test_infeasible_border_has_no_plan() {
    let selection = SizeSelection::from_preset(Preset::Baby);
    let border = BorderSpec::new(BorderKind::Simple, 20.0);
    assert!(ProjectPlan::new(selection, border.clone(), true).is_err());

    let text = confirmation_border_too_large(Unit::In, selection.size, &border, true);
    assert!(text.contains("Border: simple (20 in)"));
    assert!(text.contains("Try a smaller border width or a larger blanket size."));
}

#[test]
fn test_materials_custom_border_description() {
    let border = BorderSpec::new(BorderKind::Custom, 2.0).describe("bobble edge");
    let text = materials(
        &RenderSettings::default(),
        &plan(SizeSelection::from_preset(Preset::Twin), border, false),
    );
    assert!(text.contains("Border: custom (2 in) — bobble edge"));
    assert!(text.contains("Finished size includes border: no"));
    assert!(text.contains("Body size: 66 × 90 in"));
    assert!(text.contains("Overall size with border: 70 × 94 in"));
}

#[test]
fn test_materials_included_border_overall_is_entered_size() {
    let border = BorderSpec::new(BorderKind::Scallop, 2.5);
    let text = materials(
        &RenderSettings::default(),
        &plan(SizeSelection::from_preset(Preset::Throw), border, true),
    );
    assert!(text.contains("Body size: 45 × 55 in"));
    assert!(text.contains("Overall size with border: 50 × 60 in"));
}

#[test]
fn test_materials_converted_size_is_compact() {
    let text = materials(
        &RenderSettings::default(),
        &plan(SizeSelection::custom(50.0, 60.0, Unit::Cm), BorderSpec::none(), true),
    );
    assert!(text.contains("Finished size entered: 19.685 × 23.622 in"));
}

// ==================== Confirmation Tests ====================

#[test]
fn test_confirmation_lists_unit_and_body() {
    let selection = SizeSelection::custom(40.0, 50.0, Unit::In);
    let border = BorderSpec::new(BorderKind::Picot, 1.5);
    let text = confirmation(Unit::Ft, &plan(selection, border, true));
    assert!(text.contains("Units for custom input: ft"));
    assert!(text.contains("Border: picot (1.5 in)"));
    assert!(text.contains("Body size (main stitch area): 37 × 47 in"));
}

// ==================== Granny Plan Tests ====================

#[test]
fn test_granny_plan_uses_plan_body() {
    let border = BorderSpec::with_default_width(BorderKind::Simple);
    let text = granny_plan(
        &plan(SizeSelection::from_preset(Preset::Throw), border, false),
        8.0,
    );
    assert!(text.contains("Body size used for square layout: 50 × 60 in"));
    assert!(text.contains("7 squares across × 8 squares down = 56 squares"));
    assert!(text.contains("Overall size with border: 54 × 64 in"));
}
