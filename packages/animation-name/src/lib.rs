//! Dioxus Animation Name
//!
//! ## Overview
//! ------------
//! Set the CSS `animation-name` of an element that may or may not exist yet. Renderers hand out element handles
//! lazily: a node is only reachable once it has been mounted, and the handle you kept around may already point at
//! a node that was removed. This crate wraps the single guarded assignment every app ends up writing:
//!
//! ```rust
//! use dioxus_animation_name::{set_animation_name, AnimationStyle, InlineStyle};
//!
//! let mut style = InlineStyle::new();
//! set_animation_name(Some(&mut style), "fade-in");
//! assert_eq!(style.animation_name().as_deref(), Some("fade-in"));
//!
//! // not mounted yet, nothing happens
//! set_animation_name(None::<&mut InlineStyle>, "pulse");
//! ```
//!
//! ## Element handles
//! ------------------
//! Anything that implements [`AnimationStyle`] can be targeted. The crate ships with:
//! - [`InlineStyle`], an in-memory declaration list for headless renderers, SSR and tests
//! - `web_sys` DOM handles behind the `web` feature
//! - Dioxus `MountedData` behind the `mounted` feature
//!
//! The name is never validated. Whether it refers to a `@keyframes` rule the page knows about is up to the host
//! styling system.

#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]
#![deny(missing_docs)]

mod error;
mod inline;
mod style;

#[cfg(feature = "web")]
mod web_sys_bind;

#[cfg(feature = "mounted")]
mod mounted;

pub use error::{StyleError, StyleResult};
pub use inline::InlineStyle;
pub use style::{set_animation_name, AnimationStyle, ANIMATION_NAME};

#[cfg(feature = "mounted")]
pub use mounted::set_mounted_animation_name;
