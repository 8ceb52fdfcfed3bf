//! Text rendering for Deluge flood runs.
//!
//! [`render_frame`] draws a terrain and its flood state in one of three
//! [`RenderStyle`]s. [`AnimatedRenderer`] is a
//! [`FloodObserver`](deluge_engine::FloodObserver) that redraws after every
//! admission and paces the output, keeping all console concerns out of
//! the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animate;
pub mod frame;

pub use animate::AnimatedRenderer;
pub use frame::{render_frame, shade_for, ParseStyleError, RenderStyle};
