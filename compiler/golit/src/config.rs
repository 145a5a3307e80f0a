//! Literalizer configuration.

use golit_fmt::RenderConfig;

/// Default ceiling on value nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default prefix for synthesized binding names (`x0`, `x1`, ...).
pub const DEFAULT_BINDING_PREFIX: &str = "x";

/// Configuration for one [`Literalizer`](crate::Literalizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralizeConfig {
    /// Maximum nesting depth before failing with `DepthExceeded`.
    pub max_depth: usize,

    /// Prefix for binding names. Must be a valid Go identifier.
    pub binding_prefix: String,

    /// Layout used by `literalize_to_string`.
    pub render: RenderConfig,
}

impl Default for LiteralizeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            binding_prefix: DEFAULT_BINDING_PREFIX.to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl LiteralizeConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_binding_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.binding_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LiteralizeConfig::default();
        assert_eq!(config.max_depth, 512);
        assert_eq!(config.binding_prefix, "x");
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn builders_override_fields() {
        let config = LiteralizeConfig::default()
            .with_max_depth(8)
            .with_binding_prefix("v")
            .with_render(RenderConfig::with_max_width(40));
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.binding_prefix, "v");
        assert_eq!(config.render.max_width, 40);
    }
}
