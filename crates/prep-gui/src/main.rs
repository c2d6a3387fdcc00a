//! Prepdeck - Interview Preparation Reference
//!
//! Application entry point. Initializes logging and runs the Iced
//! application with the studio theme and default window settings.

use iced::Size;
use iced::window;

use prep_gui::app::App;

pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Prepdeck");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 720.0),
            min_size: Some(Size::new(860.0, 540.0)),
            ..Default::default()
        })
        .run()
}
