mod contact_form;
mod fade_in;
mod header;
mod mobile_menu;
mod navigation;
mod scroll_to_top;

pub use contact_form::*;
pub use fade_in::*;
pub use header::*;
pub use mobile_menu::*;
pub use navigation::*;
pub use scroll_to_top::*;
