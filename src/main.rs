//! Aegis - an animated shield scan indicator
//! Built with iced for a small, always-smooth progress display

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(420.0, 560.0))
        .antialiasing(true)
        .run()
}
