use syn::Path;

use crate::domain::error::InstrumentError;

/// How the synthesizer treats parameter bindings it cannot reduce to a
/// simple identifier (destructured, wildcard, rest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Render the literal placeholder `<pattern>` in the trace message, with
    /// no runtime value interpolation for that parameter.
    #[default]
    Placeholder,
    /// Abort the whole transform with `InstrumentError::SynthesisGap`.
    Fail,
}

/// Configuration for one instrumentation run.
#[derive(Debug, Clone)]
pub struct InstrumentConfig {
    /// Macro path the injected trace statements invoke in the instrumented
    /// program. Any macro accepting format-style arguments works, e.g.
    /// `println`, `eprintln`, `log::trace`.
    pub sink: Path,
    pub gap_policy: GapPolicy,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            sink: syn::parse_quote!(println),
            gap_policy: GapPolicy::default(),
        }
    }
}

impl InstrumentConfig {
    /// Replace the sink with a macro path parsed from `sink`, e.g.
    /// `"log::trace"`.
    pub fn with_sink(mut self, sink: &str) -> Result<Self, InstrumentError> {
        self.sink = syn::parse_str(sink)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;

    #[test]
    fn test_default_sink_is_println() {
        let config = InstrumentConfig::default();
        assert_eq!(config.sink.to_token_stream().to_string(), "println");
        assert_eq!(config.gap_policy, GapPolicy::Placeholder);
    }

    #[test]
    fn test_with_sink_accepts_qualified_path() {
        let config = InstrumentConfig::default().with_sink("log::trace").unwrap();
        assert_eq!(config.sink.to_token_stream().to_string(), "log :: trace");
    }

    #[test]
    fn test_with_sink_rejects_garbage() {
        let result = InstrumentConfig::default().with_sink("not a path");
        assert!(result.is_err(), "expected a parse error for an invalid sink");
    }
}
