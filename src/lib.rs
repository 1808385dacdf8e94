// Main library entry point for entry_trace.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::config::{GapPolicy, InstrumentConfig};
pub use domain::error::InstrumentError;
pub use domain::function::ANONYMOUS_MARKER;
pub use domain::walker::TraceRecord;

use application::InstrumentUsecase;
use infrastructure::{PrettyGenerator, SynParser};

/// Instrument `source` with the default configuration: every function-like
/// construct gains a `println!` trace statement as the first statement of
/// its body. Fails with a parse error on invalid input; input with zero
/// function-like nodes regenerates unchanged in shape.
pub fn instrument(source: &str) -> Result<String, InstrumentError> {
    instrument_with(source, &InstrumentConfig::default())
}

/// Instrument `source` with an explicit configuration (sink macro path,
/// non-simple-parameter policy).
pub fn instrument_with(
    source: &str,
    config: &InstrumentConfig,
) -> Result<String, InstrumentError> {
    let usecase = InstrumentUsecase {
        parser: &SynParser,
        generator: &PrettyGenerator,
    };
    Ok(usecase.run(source, config)?.code)
}
