use crate::domain::config::InstrumentConfig;
use crate::domain::error::InstrumentError;
use crate::domain::walker::{TraceRecord, TraceWalker};
use crate::ports::{SourceGenerator, SourceParser};

/// Result of one pipeline run: the regenerated source plus one record per
/// instrumented function-like node.
pub struct Instrumented {
    pub code: String,
    pub records: Vec<TraceRecord>,
}

pub struct InstrumentUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub generator: &'a dyn SourceGenerator,
}

impl<'a> InstrumentUsecase<'a> {
    /// Parse, walk-and-mutate, regenerate. The tree is created here, mutated
    /// in place, consumed exactly once by the generator, and dropped; the
    /// caller's input is never mutated and nothing persists across calls.
    pub fn run(
        &self,
        source: &str,
        config: &InstrumentConfig,
    ) -> Result<Instrumented, InstrumentError> {
        let mut file = self.parser.parse(source)?;
        let records = TraceWalker::new(config).walk(&mut file)?;
        let code = self.generator.generate(&file);
        Ok(Instrumented { code, records })
    }
}
