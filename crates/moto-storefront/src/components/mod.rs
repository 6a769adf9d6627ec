//! Shared chrome: navigation bar, footer, and the chat widget.

mod chat;
mod footer;
mod nav;

pub use chat::ChatWidget;
pub use footer::Footer;
pub use nav::NavBar;
