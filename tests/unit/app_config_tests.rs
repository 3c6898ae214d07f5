/*!
 * Tests for application configuration handling
 */

use std::str::FromStr;

use subforge::app_config::{Config, LogLevel, TranscriptionBackend};

use crate::common;

#[test]
fn test_defaultConfig_shouldPassValidation() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.transcription.backend, TranscriptionBackend::WhisperApi);
    assert_eq!(config.transcription.model, "whisper-1");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_saveAndLoad_withDefaultConfig_shouldRoundTrip() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::default();
    config.save(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.upload_dir, config.upload_dir);
    assert_eq!(loaded.transcription.endpoint, config.transcription.endpoint);
    assert_eq!(loaded.log_level, config.log_level);
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        dir.path(),
        "conf.json",
        r#"{"transcription": {"language": "zh"}}"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.transcription.language.as_deref(), Some("zh"));
    assert_eq!(config.transcription.model, "whisper-1");
    assert_eq!(config.subtitle_dir.to_string_lossy(), "subtitles");
}

#[test]
fn test_fromFile_withUnknownLogLevel_shouldFailParse() {
    let dir = common::create_temp_dir().unwrap();
    let path =
        common::create_test_file(dir.path(), "conf.json", r#"{"log_level": "verbose"}"#).unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_validate_withBadLanguageCode_shouldFail() {
    let mut config = Config::default();
    config.transcription.language = Some("english".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyEndpoint_shouldFail() {
    let mut config = Config::default();
    config.transcription.endpoint = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.transcription.timeout_secs = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_backendFromStr_withKnownNames_shouldParse() {
    assert_eq!(
        TranscriptionBackend::from_str("whisperapi").unwrap(),
        TranscriptionBackend::WhisperApi
    );
    assert_eq!(
        TranscriptionBackend::from_str("whisper-api").unwrap(),
        TranscriptionBackend::WhisperApi
    );
    assert_eq!(
        TranscriptionBackend::from_str("Mock").unwrap(),
        TranscriptionBackend::Mock
    );
    assert!(TranscriptionBackend::from_str("whisper-local").is_err());
}

#[test]
fn test_ensureDirs_withTempWorkspace_shouldCreateAllDirectories() {
    let dir = common::create_temp_dir().unwrap();
    let mut config = Config::default();
    config.upload_dir = dir.path().join("uploads");
    config.audio_dir = dir.path().join("audio");
    config.subtitle_dir = dir.path().join("subtitles");
    config.output_dir = dir.path().join("outputs");

    config.ensure_dirs().unwrap();

    assert!(config.upload_dir.is_dir());
    assert!(config.audio_dir.is_dir());
    assert!(config.subtitle_dir.is_dir());
    assert!(config.output_dir.is_dir());
}
