//! # cloudnex-landing
//!
//! Single-page marketing site for CloudNex, rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! ## Architecture
//!
//! - [`app`] - root controller (active section, loading splash, navigation)
//! - [`scroll`] - pure `scroll position -> section` mapping and the
//!   [`scroll::Viewport`] seam
//! - [`viewport`] - browser implementation of that seam
//! - [`sections`] - presentational page sections
//! - [`loading`], [`theme`], [`reveal`] - splash, light/dark, entrance animations
//! - [`config`], [`error`], [`logging`] - ambient plumbing
//!
//! The scroll logic has no browser dependency and is unit-tested natively:
//!
//! ```rust
//! use cloudnex_landing::scroll::resolve_active_section;
//! use cloudnex_landing::section::SectionId;
//!
//! let tops = |s: SectionId| Some(s.index() as f64 * 800.0);
//! let active = resolve_active_section(1000.0, 100.0, SectionId::Home, tops);
//! assert_eq!(active, SectionId::About);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod loading;
pub mod logging;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod sections;
pub mod theme;
pub mod viewport;

#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

pub use app::App;
pub use config::SiteConfig;
pub use section::SectionId;
