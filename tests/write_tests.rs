use stext::{
    from_file, from_str, stext, to_file, to_string, to_string_with_options, to_writer,
    WriteOptions,
};

use std::fs;

#[test]
fn test_write_to_file() {
    let path = std::env::temp_dir().join(format!("stext-{}-output.st", std::process::id()));
    let doc = stext! { "KEY1" => "value1", "KEY2" => "value2" };

    to_file(&path, &doc, &WriteOptions::default()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("KEY1: value1"));
    assert!(content.contains("KEY2: value2"));

    // A second write overwrites, never appends.
    let smaller = stext! { "ONLY" => "entry" };
    to_file(&path, &smaller, &WriteOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "ONLY: entry\n\n");

    fs::remove_file(path).unwrap();
}

#[test]
fn test_write_multiline_value() {
    let doc = stext! { "KEY_MULTILINE" => "This is\na multi-line\nvalue" };
    let rendered = to_string(&doc);
    assert_eq!(
        rendered,
        "KEY_MULTILINE: \"\"\"\nThis is\na multi-line\nvalue\n\"\"\"\n\n"
    );
}

#[test]
fn test_write_to_writer() {
    let doc = stext! { "KEY" => "value" };
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &doc).unwrap();
    assert_eq!(buffer, b"KEY: value\n\n");
}

#[test]
fn test_roundtrip_default_pipeline() {
    let input = "# header\nNAME: test\nDESC: \"\"\"\nfirst\n\nlast\n\"\"\"\nID: X1\n";
    let doc = from_str(input).unwrap();
    let doc_back = from_str(&to_string(&doc)).unwrap();
    assert_eq!(doc, doc_back);
}

#[test]
fn test_roundtrip_file_pipeline() {
    let path = std::env::temp_dir().join(format!("stext-{}-roundtrip.st", std::process::id()));
    let doc = stext! {
        "TITLE" => "hello world",
        "BODY" => "line one\nline two",
        "_COMMENT_1" => "kept comment",
    };

    to_file(&path, &doc, &WriteOptions::default()).unwrap();
    let doc_back = from_file(&path).unwrap();
    assert_eq!(doc, doc_back);

    fs::remove_file(path).unwrap();
}

#[test]
fn test_output_separator_and_padding() {
    let doc = stext! { "KEY" => "value" };

    let options = WriteOptions::new().with_separator("=").with_pad(0);
    assert_eq!(to_string_with_options(&doc, &options), "KEY=value\n\n");

    let options = WriteOptions::new().with_pad(3).with_linefeeds(1);
    assert_eq!(to_string_with_options(&doc, &options), "KEY:   value\n");
}

#[test]
fn test_comments_are_kept_together() {
    let doc = stext! {
        "_COMMENT_1" => "first",
        "_COMMENT_2" => "second",
        "KEY" => "value",
    };
    // Comment entries get one linefeed even when entries get two.
    assert_eq!(to_string(&doc), "# first\n# second\nKEY: value\n\n");
}

#[test]
fn test_single_key_filter_renders_one_entry() {
    let doc = stext! { "A" => "1", "B" => "first\nsecond", "C" => "3" };

    let options = WriteOptions::new().with_key("B");
    assert_eq!(
        to_string_with_options(&doc, &options),
        "B: \"\"\"\nfirst\nsecond\n\"\"\"\n\n"
    );

    let options = WriteOptions::new().with_key("MISSING");
    assert_eq!(to_string_with_options(&doc, &options), "");
}

#[test]
fn test_single_line_mode_escapes() {
    let doc = stext! { "DESC" => "one\ntwo" };
    let options = WriteOptions::new().with_multiline(false);
    // Embedded newlines become backslash-newline; the value is quoted.
    assert_eq!(
        to_string_with_options(&doc, &options),
        "DESC: \"one\\\ntwo\"\n\n"
    );
}
