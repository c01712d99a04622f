//! Walkthroughs of the configurator through the library API.
//!
//! Each test drives the handlers the way a shopper would and checks what the
//! render target ends up showing.

use std::sync::Arc;

use duck_attire::catalog::Catalog;
use duck_attire::config::ImageConfig;
use duck_attire::configurator::Configurator;
use duck_attire::models::{ComboPreset, View};
use duck_attire::render::{Control, DisplayContent, RecordingTarget, SummaryContent};

fn start(view: View) -> (Configurator, RecordingTarget) {
    let catalog = Arc::new(Catalog::load().expect("embedded catalog loads"));
    let configurator = Configurator::new(catalog, ImageConfig::default(), view);
    let mut target = RecordingTarget::new();
    configurator.initialize(&mut target);
    (configurator, target)
}

fn summary_pairs(target: &RecordingTarget) -> Vec<(String, String)> {
    match &target.summary {
        Some(SummaryContent::Items { items }) => items
            .iter()
            .map(|i| (i.label.clone(), i.value.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn test_shopper_builds_pants_selection() {
    let (mut configurator, mut target) = start(View::Customize);

    configurator.handle_garment_type_change("pants", &mut target);
    assert_eq!(target.option_values(Control::Color), ["grey", "black", "white"]);
    assert!(target.is_enabled(Control::Color));
    assert!(!target.is_enabled(Control::Size), "size waits for a color");

    configurator.handle_color_change("white", &mut target);
    assert!(target.is_enabled(Control::Size));
    assert!(matches!(
        target.display,
        Some(DisplayContent::Placeholder { .. })
    ));

    configurator.handle_size_change("XXL", &mut target);
    assert_eq!(
        target.display,
        Some(DisplayContent::Image {
            src: "images/HVWB16ORG003_800x white.webp".to_string(),
            alt: "Duck Pants".to_string(),
            fallback: "https://via.placeholder.com/400?text=Duck+Attire".to_string(),
        })
    );
    assert_eq!(
        summary_pairs(&target),
        [
            ("Type".to_string(), "Duck Pants".to_string()),
            ("Color".to_string(), "White".to_string()),
            ("Size".to_string(), "XXL".to_string()),
        ]
    );
}

#[test]
fn test_changing_type_discards_dependent_choices() {
    let (mut configurator, mut target) = start(View::Customize);
    configurator.handle_garment_type_change("sweatshirt", &mut target);
    configurator.handle_color_change("yellow", &mut target);
    configurator.handle_size_change("S", &mut target);

    configurator.handle_garment_type_change("jacket", &mut target);

    assert_eq!(configurator.selection().color, None);
    assert_eq!(configurator.selection().size, None);
    assert_eq!(target.option_values(Control::Color), ["black", "white"]);
    assert_eq!(target.control(Control::Color).value, "");
    assert!(!target.is_enabled(Control::Size));
    assert!(matches!(target.summary, Some(SummaryContent::Empty { .. })));
}

#[test]
fn test_gallery_card_lands_in_customize() {
    let (mut configurator, mut target) = start(View::Gallery);
    assert!(target.is_visible(View::Gallery));
    assert_eq!(target.gallery.len(), 5);

    assert!(configurator.activate_preset(3, &mut target));

    assert!(target.is_visible(View::Customize));
    assert!(!target.is_visible(View::Gallery));
    assert!(target.is_tab_active(View::Customize));
    assert_eq!(target.control(Control::GarmentType).value, "sweatshirt");
    assert_eq!(target.control(Control::Color).value, "green");
    assert_eq!(target.control(Control::Size).value, "S");
}

#[test]
fn test_custom_combo_with_unlisted_values_still_previews() {
    let (mut configurator, mut target) = start(View::Gallery);
    let combo = ComboPreset::new("jacket", "purple", "M");

    configurator.apply_combo(&combo, &mut target);

    // Purple has no image override, so the garment's base image is used.
    match &target.display {
        Some(DisplayContent::Image { alt, .. }) => assert_eq!(alt, "Duck Jacket"),
        other => panic!("expected image, got {other:?}"),
    }
    assert_eq!(
        configurator.preview(&mut target).as_deref(),
        Some("Previewing your purple jacket in size M!")
    );
}

#[test]
fn test_reset_after_preview() {
    let (mut configurator, mut target) = start(View::Customize);
    configurator.handle_garment_type_change("pants", &mut target);
    configurator.handle_color_change("black", &mut target);
    configurator.handle_size_change("L", &mut target);
    configurator.preview(&mut target);

    configurator.reset_all(&mut target);

    assert!(!configurator.selection().is_complete());
    for control in Control::SELECTORS {
        assert_eq!(target.control(control).value, "");
    }
    assert!(target.option_values(Control::Color).is_empty());
    assert!(target.option_values(Control::Size).is_empty());
    assert!(!target.is_enabled(Control::Color));
    assert_eq!(
        target.display,
        Some(DisplayContent::Placeholder {
            message: "Select options above to see your customized attire".to_string(),
        })
    );
    assert_eq!(target.notices.len(), 1, "reset emits no notice");
}

#[test]
fn test_unknown_view_name_clears_tabs() {
    let (mut configurator, mut target) = start(View::Gallery);

    assert_eq!(configurator.switch_view("checkout", &mut target), None);

    assert!(target.is_visible(View::Gallery));
    assert!(!target.is_tab_active(View::Gallery));
    assert!(!target.is_tab_active(View::Customize));
    assert_eq!(configurator.visible_view(), View::Gallery);
}

#[test]
fn test_base_url_prefixes_every_image() {
    let catalog = Arc::new(Catalog::load().expect("embedded catalog loads"));
    let images = ImageConfig {
        base_url: Some("https://cdn.example.com/".to_string()),
        ..ImageConfig::default()
    };
    let mut configurator = Configurator::new(catalog, images, View::Gallery);
    let mut target = RecordingTarget::new();
    configurator.initialize(&mut target);

    assert!(target
        .gallery
        .iter()
        .all(|card| card.image.starts_with("https://cdn.example.com/images/")));

    configurator.activate_preset(0, &mut target);
    match &target.display {
        Some(DisplayContent::Image { src, .. }) => {
            assert!(src.starts_with("https://cdn.example.com/images/"));
        }
        other => panic!("expected image, got {other:?}"),
    }
}
