//! Layout selector demo: cycles a pill button through its four layouts.
//!
//! Run with: cargo run -p capsule --example layout_selector
//!
//! Set `RUST_LOG=capsule=debug` to see layout passes.

use capsule::render::{Color, IconImage, Point, Rect};
use capsule::widget::layout::ContentLayout;
use capsule::widget::widgets::{LayoutSelectorDemo, PillButton};
use capsule::widget::{MouseButton, MousePressEvent, MouseReleaseEvent, PaintCommand};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let icon = IconImage::from_rgba(&image::RgbaImage::from_pixel(
        32,
        32,
        image::Rgba([0, 122, 255, 255]),
    ))?;
    let button = PillButton::new()
        .with_image(icon)
        .with_title("Title")
        .with_subtitle("Subtitle")
        .with_border_color(Color::SYSTEM_BLUE);

    let mut demo = LayoutSelectorDemo::new(button, Color::SYSTEM_BLUE);
    demo.button_mut().set_geometry(Rect::new(20.0, 20.0, 0.0, 0.0));

    for index in 0..ContentLayout::ALL.len() {
        demo.select(index);
        let button = demo.button_mut();
        let frames = *button.layout();

        println!("{}: button {:?}", button.content_layout(), frames.button.size);
        for command in button.display_list().commands() {
            match command {
                PaintCommand::Icon { rect, .. } => println!("  icon     {rect:?}"),
                PaintCommand::Text { rect, text, .. } => println!("  {text:<8} {rect:?}"),
                _ => {}
            }
        }
    }

    // Press and release in the middle of the button.
    let button = demo.button_mut();
    let size = button.layout().button.size;
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    button.handle_mouse_press(&MousePressEvent::new(MouseButton::Left, center));
    button.handle_mouse_release(&MouseReleaseEvent::new(MouseButton::Left, center));

    println!("activations: {}", demo.activation_count());
    Ok(())
}
