//! Diagwiz language support
//!
//! This crate resolves highlight tags for diagwiz diagram sources. A
//! [`TagRuleTable`] maps node path selectors such as `Alias/Identifier` to
//! [`HighlightTag`]s, a [`LanguageDefinition`] pairs it with a parser, and
//! [`diagwiz()`] returns the ready-to-use [`LanguageSupport`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod diagwiz;
pub mod output;
pub mod syntax;
pub mod tracing;

// Re-export commonly used types
pub use config::HighlightConfig;
pub use diagwiz::{diagwiz, diagwiz_with_config, DiagwizSupport};
pub use syntax::{
    HighlightTag, LanguageDefinition, LanguageSupport, NodeSelector, SyntaxHighlights, TagRule,
    TagRuleTable,
};
