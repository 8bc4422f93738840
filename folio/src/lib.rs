//! The folio portfolio site.
//!
//! Pages are built from constant content in [`content`] by the views in
//! [`view`], serialised with [`folio_ui::markup`], and either exported as
//! static documents by the `folio` binary or rendered live in the browser by
//! [`run`] (wasm builds only). The live site mounts the pointer follower from
//! `folio-ui` over the page and simulates contact form submission.
#![deny(clippy::unwrap_used)]

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod page;
pub mod view;
#[cfg(target_family = "wasm")]
mod web;

pub use app::Site;
pub use config::{ConfigError, FolioConfig};
pub use contact::{ContactError, ContactForm};
pub use page::{Navigator, Page};

#[cfg(target_family = "wasm")]
pub use web::run;
