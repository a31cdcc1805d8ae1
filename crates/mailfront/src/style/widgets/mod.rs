//! Widget styles: palette, buttons, containers and inputs.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{
    nav_button_style, primary_button_style, read_row_style, toolbar_button_style,
    unread_row_style,
};
pub use containers::{
    alert_style, backdrop_style, email_header_style, header_style, panel_style,
};
pub use inputs::{input_style, scrollable_style};
