//! End-to-end tests for the interactive wizard.
//!
//! Each test scripts a whole session through in-memory input and checks
//! what the user would have seen.

use craftlogic::config::Settings;
use craftlogic::detect::{Detection, PatternKind};
use craftlogic::render::{PatternStyle, RenderSettings};
use craftlogic::wizard::Wizard;
use std::io::Cursor;

fn run_with(input: &str, settings: Settings, detection: Option<Detection>) -> String {
    let mut wizard = Wizard::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), settings);
    if let Some(detection) = detection {
        wizard = wizard.with_detection(detection);
    }
    wizard.run().expect("session should not fail");
    String::from_utf8(wizard.into_output()).expect("output is UTF-8")
}

fn run(input: &str) -> String {
    run_with(input, Settings::default(), None)
}

// ==================== Main Menu Tests ====================

#[test]
fn test_quit_from_main_menu() {
    let out = run("q\n");
    assert!(out.starts_with("CraftLogic: Crochet\n"));
    assert!(out.contains("Style: beginner"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_end_of_input_says_goodbye() {
    let out = run("");
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_unknown_menu_choice_hints() {
    let out = run("7\n\nq\n");
    assert!(out.contains("Please type 1, 2, or q."));
    assert_eq!(out.matches("MAIN MENU").count(), 3);
}

// ==================== Blanket Builder Tests ====================

#[test]
fn test_builder_throw_with_added_border() {
    let out = run("2\nn\nthrow\n1\n\n2\ny\n\nq\n");
    assert!(out.contains("Body size (main stitch area): 50 × 60 in"));
    assert!(out.contains("Selected: preset (throw)"));
    assert!(out.contains("Border: simple (2 in)"));
    assert!(out.contains("Finished size includes border: no"));
    assert!(out.contains("Body size: 50 × 60 in"));
    assert!(out.contains("Overall size with border: 54 × 64 in"));
    assert!(out.contains("Estimated yardage (v1): 1150–1850 yd"));
    assert!(out.contains("Row 1: double crochet in stitches across"));
    assert!(out.contains("Row 6: double crochet in spaces across"));
    assert_eq!(out.matches("MAIN MENU").count(), 2);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_builder_border_too_large_restarts_at_size() {
    let out = run("2\nn\nbaby\n1\n20\n1\nthrow\n0\ny\n\nq\n");
    assert!(out.contains("That border is too large"));
    assert!(out.contains("Okay — let’s try again."));
    assert_eq!(out.matches("Enter size: ").count(), 2);
    assert!(out.contains("Border: none"));
    assert!(out.contains("Estimated yardage (v1): 1050–1650 yd"));
}

#[test]
fn test_builder_answering_no_restarts() {
    let out = run("2\nn\ntwin\n0\nn\nqueen\n0\ny\nq\n");
    assert!(out.contains("Okay — let’s try again."));
    assert!(out.contains("Selected: preset (queen)"));
    assert!(!out.contains("Selected: preset (twin)"));
}

#[test]
fn test_builder_back_at_confirmation_restarts_at_size() {
    let out = run("2\nn\ntwin\n0\nb\nbaby\n0\ny\nq\n");
    assert!(!out.contains("Okay — let’s try again."));
    assert!(out.contains("Selected: preset (baby)"));
}

#[test]
fn test_builder_custom_size_in_centimeters() {
    let out = run("2\ny\ncm\n127x152.4\n0\ny\nq\n");
    assert!(out.contains("Selected: custom (cm)"));
    assert!(out.contains("Finished size entered: 50 × 60 in"));
}

#[test]
fn test_builder_advanced_wording() {
    let settings = Settings {
        render: RenderSettings::new(PatternStyle::Advanced),
        ..Settings::default()
    };
    let out = run_with("2\nn\n52x68\n0\ny\n\nq\n", settings, None);
    assert!(out.contains("Style: advanced"));
    assert!(out.contains("Selected: custom (in)"));
    assert!(out.contains("Row 1: dc in sts across"));
}

#[test]
fn test_builder_back_returns_to_menu() {
    let out = run("2\nn\nb\nq\n");
    assert_eq!(out.matches("MAIN MENU").count(), 2);
    assert!(!out.contains("MATERIALS"));
}

#[test]
fn test_builder_quit_mid_flow() {
    let out = run("2\nn\nthrow\nq\n");
    assert!(!out.contains("MATERIALS"));
    assert_eq!(out.matches("MAIN MENU").count(), 1);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_builder_reprompts_bad_input() {
    let out = run("2\nn\n-5x10\nthrow\n9\n1\nwide\n2\n3\n1\ny\nq\n");
    assert!(out.contains("Try \"throw\" or dimensions like \"52x68\""));
    assert!(out.contains("Please type 0, 1, 2, 3, 4, or 5"));
    assert!(out.contains("Please enter a positive number, e.g. 2 or 3.5"));
    assert!(out.contains("Please type 1 or 2"));
    assert!(out.contains("Body size: 46 × 56 in"));
}

#[test]
fn test_builder_border_menu_takes_bare_digits_only() {
    let out = run("2\nn\nthrow\n+1\n05\n1\n\n2\ny\nq\n");
    assert_eq!(out.matches("Please type 0, 1, 2, 3, 4, or 5").count(), 2);
    assert!(out.contains("Border: simple (2 in)"));
}

// ==================== Recreate From Photo Tests ====================

#[test]
fn test_photo_demo_plan() {
    let out = run("1\n6\nn\nthrow\n1\n3\n1\n\nq\n");
    assert!(out.contains("Detected: granny_square (confidence 0.86)"));
    assert!(out.contains("Target size: ~6 in across (estimate: ~6 rounds)"));
    assert!(out.contains("Body size used for square layout: 44 × 54 in"));
    assert!(out.contains("Estimated layout: 8 squares across × 9 squares down = 72 squares"));
    assert!(out.contains("~48 × 54 in"));
    assert!(out.contains("Finished size includes border: yes"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_photo_demo_no_border() {
    let out = run("1\n10\nn\nbaby\n0\n\nq\n");
    assert!(!out.contains("FINISHED SIZE QUESTION"));
    assert!(out.contains("Estimated layout: 3 squares across × 4 squares down = 12 squares"));
    assert!(out.contains("Border: none"));
}

#[test]
fn test_photo_demo_border_too_large() {
    let out = run("1\n6\nn\nbaby\n4\n16\n1\n\nq\n");
    assert!(out.contains("Border is too large for this blanket size"));
    assert!(!out.contains("Estimated layout"));
}

#[test]
fn test_photo_demo_huge_blanket_small_squares() {
    let out = run("1\n1\nn\n100000x100000\n0\n\nq\n");
    assert!(out.contains(
        "Estimated layout: 100000 squares across × 100000 squares down = 10000000000 squares"
    ));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_photo_demo_back_at_square_size() {
    let out = run("1\nb\nq\n");
    assert!(out.contains("GRANNY SQUARE SIZE"));
    assert!(!out.contains("PROJECT: BLANKET SIZE"));
    assert!(!out.contains("PATTERN: Classic Granny Square"));
    assert_eq!(out.matches("MAIN MENU").count(), 2);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_photo_demo_back_at_border() {
    let out = run("1\n6\nn\nthrow\nB\nq\n");
    assert!(out.contains("Choose a border style:"));
    assert!(!out.contains("PROJECT PLAN"));
    assert_eq!(out.matches("MAIN MENU").count(), 2);
}

#[test]
fn test_photo_demo_back_at_border_inclusion() {
    let out = run("1\n6\nn\nthrow\n1\n\nb\nq\n");
    assert!(out.contains("FINISHED SIZE QUESTION"));
    assert!(!out.contains("PROJECT PLAN"));
    assert_eq!(out.matches("MAIN MENU").count(), 2);
}

#[test]
fn test_photo_demo_unsupported_pattern() {
    let detection = Detection::new(PatternKind::Unsupported("c2c".to_string()), 0.5);
    let out = run_with("1\n\nq\n", Settings::default(), Some(detection));
    assert!(out.contains("Detected: c2c (confidence 0.50)"));
    assert!(out.contains("isn’t supported yet"));
    assert!(!out.contains("GRANNY SQUARE SIZE"));
    assert_eq!(out.matches("MAIN MENU").count(), 2);
}

#[test]
fn test_photo_demo_quit_at_return_prompt() {
    let out = run("1\n6\nn\nthrow\n0\nq\n");
    assert!(out.contains("PROJECT PLAN: Granny-Square Blanket"));
    assert_eq!(out.matches("MAIN MENU").count(), 1);
}
