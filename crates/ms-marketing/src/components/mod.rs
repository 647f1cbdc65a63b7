//! Marketing site components

mod cards;
mod footer;
mod inquiry_form;
mod nav;
mod theme_picker;

pub use cards::*;
pub use footer::Footer;
pub use inquiry_form::InquiryForm;
pub(crate) use inquiry_form::service_icon;
pub use nav::SiteNav;
pub use theme_picker::ThemePicker;
