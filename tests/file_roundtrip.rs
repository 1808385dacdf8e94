/// File-to-file flow of the I/O wrapper: read a source file, instrument it,
/// write the result, and check the written program.

use entry_trace::instrument;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_instrumented_file_written_verbatim() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("input.rs");
    let output_path = dir.path().join("output.rs");

    fs::write(&input_path, include_str!("../testdata/foo.rs")).unwrap();

    let source = fs::read_to_string(&input_path).unwrap();
    let instrumented = instrument(&source).unwrap();
    fs::write(&output_path, &instrumented).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, instrumented, "output must be written verbatim");

    // The written program is itself valid Rust.
    let reparsed = syn::parse_file(&written);
    assert!(reparsed.is_ok(), "instrumented output must reparse: {reparsed:?}");
    assert!(written.contains("Entering foo({:?}, {:?}, {:?}) at line 1"));
}
