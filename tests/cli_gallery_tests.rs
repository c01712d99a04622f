//! End-to-end tests for `duck-attire gallery` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_gallery_list_human() {
    let output = run(&["gallery", "list"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Gallery (5 presets):"));
    assert!(text.contains("[0] Duck Sweatshirt"));
    assert!(text.contains("black - M"));
    assert!(text.contains("grey - XL"));
}

#[test]
fn test_gallery_list_json() {
    let output = run(&["gallery", "list", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    let cards = json["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 5);
    assert_eq!(cards[1]["title"], "Duck Pants");
    assert_eq!(cards[1]["subtitle"], "black - L");
    assert_eq!(cards[1]["image"], "images/HVWB16ORG6_800x black.webp");
    assert_eq!(
        cards[1]["fallback"],
        "https://via.placeholder.com/200?text=Duck+Attire"
    );
}

#[test]
fn test_gallery_apply_switches_to_customize() {
    let output = run(&["gallery", "apply", "4", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["view"], "customize");
    assert_eq!(json["selection"]["garment_type"], "pants");
    assert_eq!(json["selection"]["color"], "grey");
    assert_eq!(json["selection"]["size"], "XL");
    assert_eq!(json["render"]["visible_views"], serde_json::json!(["customize"]));
}

#[test]
fn test_gallery_apply_human() {
    let output = run(&["gallery", "apply", "2"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.contains("Applied preset 2"));
    assert!(text.contains("Type: Duck Jacket"));
}

#[test]
fn test_gallery_apply_out_of_range() {
    let output = run(&["gallery", "apply", "9"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("No preset at index 9"));
}
