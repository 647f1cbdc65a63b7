//! MeghamSys Marketing Site Core
//!
//! This crate holds the non-presentational state behind the marketing site:
//! the selectable visual themes and their persistence, the fixed service and
//! industry catalogs, the contact-inquiry form state machine, and the
//! configuration pointing at the inquiry backend.

pub mod catalog;
pub mod config;
pub mod inquiry;
pub mod theme;

pub use config::SiteConfig;
pub use inquiry::{
    InquiryController, InquiryDraft, InquiryField, InquiryPayload, InquiryTransport,
    SubmissionStatus, TransportError,
};
pub use theme::{MemoryStorage, Theme, ThemeStorage, ThemeStore, ThemeTokens};
