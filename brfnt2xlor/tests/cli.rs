//! Run the converter end to end.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use brfnt_test_data::{rfnt, sample_font};
use pretty_assertions::assert_eq;

fn brfnt2xlor<P: AsRef<OsStr>>(args: &[P]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_brfnt2xlor"))
        .args(args)
        .env("USER", "tester")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("font.brfnt");
    std::fs::write(&input, sample_font().as_slice()).unwrap();

    let no_args: [&Path; 0] = [];
    for output in [brfnt2xlor(&no_args), brfnt2xlor(&[&input])] {
        assert!(!output.status.success());
        assert!(stderr(&output).contains("brfnt2xlor [file.brfnt] [output.xlor]"));
    }
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.brfnt");
    let out = dir.path().join("missing.xlor");

    let output = brfnt2xlor(&[&input, &out]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("File not found: "));
    assert!(!out.exists());
}

#[test]
fn malformed_font_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swapped.brfnt");
    let out = dir.path().join("swapped.xlor");
    let mut font = sample_font();
    font.write_at(rfnt::BYTE_ORDER_MARK, 0xFFFE_u16);
    std::fs::write(&input, font.as_slice()).unwrap();

    let output = brfnt2xlor(&[&input, &out]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid Byte Order Mark: 0xFFFE"));
    assert!(!out.exists());
}

#[test]
fn broken_chain_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.brfnt");
    let out = dir.path().join("broken.xlor");
    let mut font = sample_font();
    font.write_at(&rfnt::cmap(2), read_brfnt::types::Tag::new(b"PAMC"));
    std::fs::write(&input, font.as_slice()).unwrap();

    let output = brfnt2xlor(&[&input, &out]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid CMAP Magic: PAMC"));
    assert!(!out.exists());
}

#[test]
fn empty_grid_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.brfnt");
    let out = dir.path().join("flat.xlor");
    let mut font = sample_font();
    font.write_at(rfnt::GLYPHS_PER_ROW, 0_u16);
    std::fs::write(&input, font.as_slice()).unwrap();

    let output = brfnt2xlor(&[&input, &out]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid glyph sheet geometry 0x4"));
    assert!(!out.exists());
}

#[test]
fn unknown_mapping_kind_is_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("future.brfnt");
    let out = dir.path().join("future.xlor");
    let font = rfnt::RfntBuilder::new(2, 1)
        .direct(0x41, 0x41, 0)
        .unknown(9, 0x61, 0x7A)
        .direct(0x42, 0x42, 1)
        .build();
    std::fs::write(&input, font.as_slice()).unwrap();

    let output = brfnt2xlor(&[&input, &out]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stderr(&output), "");
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("<!--Image #1-->\nA B \n"));
}

#[test]
fn converts_sample_font() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("font.brfnt");
    let out = dir.path().join("sample.xlor");
    std::fs::write(&input, sample_font().as_slice()).unwrap();

    let output = brfnt2xlor(&[&input, &out]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stderr(&output), "");

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
    assert!(text.contains("<create user=\"tester\" host=\""));
    assert!(text.contains("<title>sample</title>"));
    assert!(text.contains("<area width=\"6\" height=\"4\"/>"));
    assert!(text.contains("<!--Image #1-->\nA B C D E F \n"));
    assert!(text.contains("<!--Image #2-->\nY Z &quot; &amp; &apos; &lt; \n"));
    assert!(text.ends_with("</letter-order>\n"));
}

#[test]
fn output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("font.brfnt");
    std::fs::write(&input, sample_font().as_slice()).unwrap();

    // everything but the creation date
    let convert = |name: &str| {
        let out = dir.path().join(name);
        assert!(brfnt2xlor(&[&input, &out]).status.success());
        std::fs::read_to_string(&out)
            .unwrap()
            .lines()
            .filter(|line| !line.contains("<create ") && !line.contains("<title>"))
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };
    assert_eq!(convert("first.xlor"), convert("second.xlor"));
}
