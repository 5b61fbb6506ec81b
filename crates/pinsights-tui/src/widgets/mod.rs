//! Custom widget components

mod about;
mod alert;
mod cards;
mod header;
mod status_bar;
mod url_input;

pub use about::{AboutPanel, ABOUT_TITLE};
pub use alert::{ErrorAlert, ALERT_TITLE};
pub use cards::{CardGrid, CardWidget, SkeletonCard, SkeletonGrid};
pub use header::{MainHeader, APP_TITLE, TAGLINE};
pub use status_bar::{Footer, StatusBar, FOOTER_TEXT};
pub use url_input::{visible_window, UrlInput, PLACEHOLDER};
