//! Trace statement synthesis.
//!
//! Builds the single statement spliced at the entry of each function-like
//! node:
//!
//! ```text
//! <sink>!("Entering <name>(<p1>, <p2>, ...) at line <line>", p1, p2, ...);
//! ```
//!
//! Each simple parameter renders as a `{:?}` placeholder bound to the
//! parameter's identifier, so the trace logs the runtime value, not the name.

use proc_macro2::{Ident, Span};
use syn::{parse_quote, LitStr, Stmt};

use crate::domain::config::{GapPolicy, InstrumentConfig};
use crate::domain::error::InstrumentError;
use crate::domain::function::{FunctionFacts, ParamBinding};

/// Placeholder rendered in place of a parameter that has no simple name.
pub const PATTERN_PLACEHOLDER: &str = "<pattern>";

pub struct TraceSynthesizer<'a> {
    config: &'a InstrumentConfig,
}

impl<'a> TraceSynthesizer<'a> {
    pub fn new(config: &'a InstrumentConfig) -> Self {
        Self { config }
    }

    /// Build the trace statement for one function-like node. The facts are
    /// not mutated; the returned statement is pure injected content with no
    /// back-reference to the triggering node.
    pub fn synthesize(&self, facts: &FunctionFacts) -> Result<Stmt, InstrumentError> {
        let mut placeholders = Vec::with_capacity(facts.params.len());
        let mut args: Vec<Ident> = Vec::new();

        for param in &facts.params {
            match param {
                ParamBinding::Simple(ident) => {
                    placeholders.push("{:?}");
                    args.push(ident.clone());
                }
                ParamBinding::Pattern(text) => match self.config.gap_policy {
                    GapPolicy::Placeholder => placeholders.push(PATTERN_PLACEHOLDER),
                    GapPolicy::Fail => {
                        return Err(InstrumentError::SynthesisGap {
                            function: facts.display_name().to_string(),
                            line: facts.line,
                            detail: format!("parameter `{text}` is not a simple identifier"),
                        });
                    }
                },
            }
        }

        let message = format!(
            "Entering {}({}) at line {}",
            facts.display_name(),
            placeholders.join(", "),
            facts.line
        );
        let template = LitStr::new(&message, Span::call_site());
        let sink = &self.config.sink;
        Ok(parse_quote! { #sink!(#template #(, #args)*); })
    }
}
