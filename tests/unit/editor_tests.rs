/*!
 * Tests for the subtitle edit session facade
 */

use subforge::subtitle::{EntryDraft, SubtitleEditor};
use subforge::SubtitleError;

use crate::common;

fn draft(start: &str, end: &str, text: &str) -> EntryDraft {
    EntryDraft {
        start_time: start.to_string(),
        end_time: end.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn test_load_withSampleFile_shouldExposeEntryViews() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_subtitle(dir.path(), "sample.srt").unwrap();

    let mut editor = SubtitleEditor::new();
    editor.load(&path).unwrap();

    let views = editor.export_view();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].index, 1);
    assert_eq!(views[0].start_time, "00:00:01,000");
    assert_eq!(views[2].text, "For testing purposes.");
}

#[test]
fn test_load_withMissingFile_shouldReturnIoError() {
    let dir = common::create_temp_dir().unwrap();

    let mut editor = SubtitleEditor::new();
    let result = editor.load(dir.path().join("nope.srt"));

    assert!(matches!(result, Err(SubtitleError::Io(_))));
    assert!(editor.export_view().is_empty());
}

#[test]
fn test_load_withPartiallyCorruptFile_shouldKeepValidBlocks() {
    let dir = common::create_temp_dir().unwrap();
    let content = "1\n00:00:01,000 --> 00:00:02,000\nGood\n\nbroken block\n\n2\nnot a time line\nBad\n\n9\n00:00:05,000 --> 00:00:06,000\nAlso good\n";
    let path = common::create_test_file(dir.path(), "corrupt.srt", content).unwrap();

    let mut editor = SubtitleEditor::new();
    editor.load(&path).unwrap();

    let views = editor.export_view();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].text, "Good");
    assert_eq!(views[1].index, 2);
    assert_eq!(views[1].text, "Also good");
}

#[test]
fn test_applyBulk_withDrafts_shouldReplaceWholeTrack() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_subtitle(dir.path(), "sample.srt").unwrap();

    let mut editor = SubtitleEditor::new();
    editor.load(&path).unwrap();
    editor.apply_bulk(vec![
        draft("00:00:01,000", "00:00:02,500", "Hello"),
        draft("00:00:03,000", "00:00:04,000", "World"),
    ]);

    let views = editor.export_view();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].index, 1);
    assert_eq!(views[1].index, 2);
    assert_eq!(views[0].text, "Hello");
}

#[test]
fn test_save_withEditedTrack_shouldWriteCanonicalSrt() {
    let dir = common::create_temp_dir().unwrap();
    let out_path = dir.path().join("out.srt");

    let mut editor = SubtitleEditor::new();
    editor.apply_bulk(vec![
        draft("00:00:01,000", "00:00:02,500", "Hello"),
        draft("00:00:03,000", "00:00:04,000", "World"),
    ]);
    editor.save(&out_path).unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "1\n00:00:01,000 --> 00:00:02,500\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld\n"
    );
}

#[test]
fn test_save_withMissingParentDir_shouldCreateIt() {
    let dir = common::create_temp_dir().unwrap();
    let out_path = dir.path().join("nested").join("deep").join("out.srt");

    let mut editor = SubtitleEditor::new();
    editor.apply_bulk(vec![draft("00:00:01,000", "00:00:02,000", "Entry")]);
    editor.save(&out_path).unwrap();

    assert!(out_path.exists());
}

#[test]
fn test_validateTime_withValidAndInvalidInput_shouldMatchGrammar() {
    let editor = SubtitleEditor::new();

    assert!(editor.validate_time("00:00:01,000"));
    assert!(!editor.validate_time("1:0:1"));
}
