//! Style, archive, accessibility and interaction behavior of the pill button.

use std::sync::Arc;

use capsule::archive::{self, ArchiveRecord, ButtonArchive};
use capsule::render::{Color, IconImage, Point, Rect};
use capsule::widget::layout::ContentLayout;
use capsule::widget::style::{ButtonColors, VisualState, resolve_background, resolve_border, resolve_text};
use capsule::widget::widgets::{LayoutSelectorDemo, PillButton};
use capsule::widget::{MouseButton, MousePressEvent, MouseReleaseEvent, PaintCommand};
use parking_lot::Mutex;
use serde_json::json;

fn icon(width: u32, height: u32) -> IconImage {
    let mut pixels = image::RgbaImage::new(width, height);
    pixels.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    IconImage::from_rgba(&pixels).unwrap()
}

// ---------------------------------------------------------------------------
// State resolution
// ---------------------------------------------------------------------------

#[test]
fn state_table() {
    let background = Some(Color::BLUE);
    let border = Some(Color::GREEN);
    let tint = Some(Color::RED);

    assert_eq!(resolve_background(true, false, background), Some(Color::BLUE));
    assert_eq!(resolve_border(true, false, border), Some(Color::GREEN));
    assert_eq!(resolve_text(true, false, tint), Color::RED);

    assert_eq!(resolve_background(true, true, background), Some(Color::BLUE.with_alpha(0.5)));
    assert_eq!(resolve_border(true, true, border), Some(Color::GREEN.with_alpha(0.75)));
    assert_eq!(resolve_text(true, true, tint), Color::RED.with_alpha(0.75));

    for highlighted in [false, true] {
        assert_eq!(resolve_background(false, highlighted, background), Some(Color::QUATERNARY_LABEL));
        assert_eq!(resolve_border(false, highlighted, border), Some(Color::TERTIARY_LABEL));
        assert_eq!(resolve_text(false, highlighted, tint), Color::TERTIARY_LABEL);
    }
}

#[test]
fn button_applies_resolved_colors() {
    let mut button = PillButton::new()
        .with_title("Save")
        .with_background_color(Color::BLUE)
        .with_border_color(Color::GREEN)
        .with_tint_color(Color::RED);

    let colors = ButtonColors {
        background: Some(Color::BLUE),
        border: Some(Color::GREEN),
        tint: Some(Color::RED),
    };
    assert_eq!(button.resolved_style(), colors.resolve(VisualState::default()));

    button.set_highlighted(true);
    let style = button.resolved_style();
    assert_eq!(style.background, Some(Color::BLUE.with_alpha(0.5)));
    assert_eq!(style.content, Color::RED.with_alpha(0.75));

    button.set_enabled(false);
    let list = button.display_list();
    for command in list.commands() {
        match command {
            PaintCommand::FillRoundedRect { color, .. } => assert_eq!(*color, Color::QUATERNARY_LABEL),
            PaintCommand::StrokeRoundedRect { color, .. } => assert_eq!(*color, Color::TERTIARY_LABEL),
            PaintCommand::Text { color, .. } => assert_eq!(*color, Color::TERTIARY_LABEL),
            PaintCommand::Icon { .. } => unreachable!("no icon set"),
        }
    }
}

#[test]
fn icon_is_drawn_with_content_tint() {
    let mut button = PillButton::new().with_image(icon(24, 24)).with_tint_color(Color::RED);
    let list = button.display_list();
    assert!(list.commands().iter().any(|command| matches!(
        command,
        PaintCommand::Icon { tint, .. } if *tint == Color::RED
    )));
}

// ---------------------------------------------------------------------------
// Archive
// ---------------------------------------------------------------------------

#[test]
fn archive_round_trips_every_combination() {
    let image = icon(32, 16);
    for mask in 0u8..16 {
        let original = ButtonArchive {
            title: (mask & 1 != 0).then(|| "Save".to_string()),
            subtitle: (mask & 2 != 0).then(|| "to Drive".to_string()),
            image: (mask & 4 != 0).then(|| image.clone()),
            border_color: (mask & 8 != 0).then_some(Color::from_rgb8(10, 20, 30)),
        };

        let record = original.encode();
        assert_eq!(record.len(), mask.count_ones() as usize);

        let bytes = record.to_bytes().unwrap();
        let restored = archive::decode(&ArchiveRecord::from_bytes(&bytes).unwrap());
        assert_eq!(restored, original, "mask {mask:#06b}");
    }
}

#[test]
fn archived_image_keeps_dimensions() {
    let record = archive::encode(None, None, Some(&icon(32, 16)), None);
    let image = archive::decode(&record).image.unwrap();
    assert_eq!((image.width(), image.height()), (32, 16));
}

#[test]
fn malformed_fields_decode_as_absent() {
    let bytes = serde_json::to_vec(&json!({
        "title": "Save",
        "subtitle": null,
        "image": "aGVsbG8=",
        "borderColor": { "r": "red" },
    }))
    .unwrap();

    let decoded = archive::decode(&ArchiveRecord::from_bytes(&bytes).unwrap());
    assert_eq!(decoded.title.as_deref(), Some("Save"));
    assert_eq!(decoded.subtitle, None);
    assert_eq!(decoded.image, None);
    assert_eq!(decoded.border_color, None);
}

#[test]
fn button_encodes_only_archived_properties() {
    let button = PillButton::new()
        .with_title("Save")
        .with_subtitle("to Drive")
        .with_tint_color(Color::RED)
        .with_content_layout(ContentLayout::Vertical);

    let record = button.encode();
    let mut keys: Vec<_> = record.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["subtitle", "title"]);

    let restored = PillButton::decode_from(&record);
    assert_eq!(restored.title(), Some("Save"));
    assert_eq!(restored.subtitle(), Some("to Drive"));
    assert_eq!(restored.content_layout(), ContentLayout::Horizontal);
}

// ---------------------------------------------------------------------------
// Accessibility
// ---------------------------------------------------------------------------

#[test]
fn accessibility_labels() {
    let both = PillButton::new().with_title("Save").with_subtitle("to Drive");
    assert_eq!(both.accessibility_label(), "Save\n\nto Drive");

    let title_only = PillButton::new().with_title("Save");
    assert_eq!(title_only.accessibility_label(), "Save");

    assert_eq!(PillButton::new().accessibility_label(), "");
}

#[cfg(feature = "accessibility")]
#[test]
fn accessibility_node_is_a_button() {
    use capsule::widget::accessibility::Accessible;

    let mut button = PillButton::new().with_title("Save").with_enabled(false);
    button.set_geometry(Rect::new(0.0, 0.0, 120.0, 44.0));
    let node = button.build_accessible_node(button.geometry());

    assert_eq!(node.role(), accesskit::Role::Button);
    assert_eq!(node.label(), Some("Save"));
    assert!(node.is_disabled());
    assert!(node.supports_action(accesskit::Action::Click));
}

// ---------------------------------------------------------------------------
// Interaction and demo
// ---------------------------------------------------------------------------

#[test]
fn press_and_release_inside_triggers_primary_action() {
    let mut button = PillButton::new().with_title("Save");
    button.set_geometry(Rect::new(100.0, 100.0, 120.0, 44.0));
    button.layout();

    let events = Arc::new(Mutex::new(Vec::new()));
    for (name, signal) in [
        ("pressed", button.pressed()),
        ("released", button.released()),
        ("primary", button.primary_action()),
    ] {
        let sink = events.clone();
        signal.connect(move |_| sink.lock().push(name));
    }

    let local = Point::new(60.0, 22.0);
    button.handle_mouse_press(&MousePressEvent::new(MouseButton::Left, local));
    button.handle_mouse_release(&MouseReleaseEvent::new(MouseButton::Left, local));

    assert_eq!(*events.lock(), vec!["pressed", "released", "primary"]);
}

#[test]
fn demo_selects_vertical_layout() {
    let mut demo = LayoutSelectorDemo::default();
    let view_tint = demo.selector().view_tint();
    demo.select(2);

    assert_eq!(demo.button().content_layout(), ContentLayout::Vertical);
    let tints: Vec<_> = demo
        .selector()
        .controls()
        .iter()
        .map(|control| control.effective_tint(view_tint))
        .collect();
    assert_eq!(tints, vec![view_tint, view_tint, Color::LABEL, view_tint]);

    let frames = *demo.button_mut().layout();
    assert!(frames.icon.is_none());
    assert!(frames.title.unwrap().bottom() <= frames.subtitle.unwrap().top() + 1e-3);
}
