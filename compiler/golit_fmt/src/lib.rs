//! Golit Renderer
//!
//! Renders golit expression trees as Go source text.
//!
//! # Architecture
//!
//! Rendering uses a two-pass, width-based breaking algorithm:
//!
//! 1. **Measure Pass**: Bottom-up traversal calculating the inline width of
//!    each node
//! 2. **Render Pass**: Top-down rendering deciding inline vs broken based on
//!    width
//!
//! Core principle: render inline if it fits (<=100 columns), break otherwise.
//! Broken composite literals put one element per line with a trailing
//! comma, which Go's semicolon insertion requires.
//!
//! # Modules
//!
//! - [`width`]: Width calculation for expression nodes
//! - [`emitter`]: Output abstraction
//! - [`context`]: Render configuration, indentation and column tracking
//! - [`literals`]: Go string literal quoting
//! - [`renderer`]: Core rendering engine

pub mod context;
pub mod emitter;
pub mod literals;
pub mod renderer;
pub mod width;

pub use context::{RenderConfig, RenderContext, MAX_LINE_WIDTH, TAB_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use literals::{backquote, can_backquote, is_print, needs_escape, quote};
pub use renderer::{render_expr, render_inline, render_type, Renderer};
pub use width::WidthCalculator;
