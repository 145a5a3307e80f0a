//! Render Context
//!
//! Tracks state during rendering: column position, indentation level, and
//! output. Provides methods for emitting text while maintaining state.

use crate::emitter::{Emitter, StringEmitter};

/// Default maximum line width before breaking.
pub const MAX_LINE_WIDTH: usize = 100;

/// Columns a tab occupies when measuring line width.
pub const TAB_WIDTH: usize = 4;

/// Configuration for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum line width before breaking to multiple lines.
    pub max_width: usize,

    /// Width of one indentation tab, for column accounting only.
    pub tab_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_LINE_WIDTH,
            tab_width: TAB_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Create a new config with the specified max width.
    pub fn with_max_width(max_width: usize) -> Self {
        Self {
            max_width,
            ..Default::default()
        }
    }

    /// A config that never breaks lines.
    pub fn single_line() -> Self {
        Self::with_max_width(usize::MAX)
    }
}

/// Rendering context that tracks state during output.
///
/// Wraps an emitter and maintains the current column (0-indexed) and
/// indentation level. All emit operations update the column.
pub struct RenderContext<E: Emitter = StringEmitter> {
    emitter: E,
    column: usize,
    indent_level: usize,
    config: RenderConfig,
}

impl RenderContext<StringEmitter> {
    /// Create a new context with a string emitter and custom config.
    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_emitter_and_config(StringEmitter::new(), config)
    }
}

impl<E: Emitter> RenderContext<E> {
    pub fn with_emitter_and_config(emitter: E, config: RenderConfig) -> Self {
        Self {
            emitter,
            column: 0,
            indent_level: 0,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Get the current column position (0-indexed).
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Check if content of `width` would fit on the current line.
    pub fn fits(&self, width: usize) -> bool {
        self.column
            .checked_add(width)
            .is_some_and(|end| end <= self.config.max_width)
    }

    /// Emit a text fragment that contains no newline.
    pub fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
        self.column += text.chars().count();
    }

    /// Emit a newline followed by the current indentation.
    pub fn emit_newline_indent(&mut self) {
        self.emitter.emit_newline();
        self.emitter.emit_indent(self.indent_level);
        self.column = self.indent_level * self.config.tab_width;
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Consume the context, returning the emitter.
    pub fn finish(self) -> E {
        self.emitter
    }
}
