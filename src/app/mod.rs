mod app;
mod color_input;
mod parse_input;

pub use app::App;
