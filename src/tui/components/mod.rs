mod status_bar;
mod title_bar;

pub use status_bar::render_status_bar;
pub use title_bar::render_title_bar;
