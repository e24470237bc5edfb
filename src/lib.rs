pub mod panel;
pub mod render_options;
