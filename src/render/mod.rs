mod html;
mod terminal;

pub use html::{render_html, write_html};
pub use terminal::render_terminal;
