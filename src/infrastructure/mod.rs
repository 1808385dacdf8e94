// Infrastructure implementations for entry_trace.
//
// The parser and generator are external library responsibilities (`syn` and
// `prettyplease`); these adapters only bind them to the ports.

use crate::domain::error::InstrumentError;
use crate::ports::{SourceGenerator, SourceParser};
use syn::File;

pub struct SynParser;
impl SourceParser for SynParser {
    fn parse(&self, source: &str) -> Result<File, InstrumentError> {
        syn::parse_file(source).map_err(InstrumentError::Parse)
    }
}

pub struct PrettyGenerator;
impl SourceGenerator for PrettyGenerator {
    fn generate(&self, file: &File) -> String {
        prettyplease::unparse(file)
    }
}
