use thiserror::Error;

/// Errors produced by a single instrumentation run.
///
/// Both kinds are deterministic functions of the input text: there is no
/// partial output and nothing to retry.
#[derive(Error, Debug)]
pub enum InstrumentError {
    /// Input text is not valid Rust under the grammar `syn` supports.
    #[error("parse error at line {}, column {}: {}", .0.span().start().line, .0.span().start().column + 1, .0)]
    Parse(#[from] syn::Error),

    /// A function-like node has a parameter shape the synthesizer cannot
    /// faithfully represent and the fail policy is active.
    #[error("cannot synthesize trace for `{function}` (line {line}): {detail}")]
    SynthesisGap {
        function: String,
        line: usize,
        detail: String,
    },
}
