/*!
 * Tests for transcription provider implementations
 */

use std::path::Path;

use subforge::providers::{MockTranscriber, TimedSegment, TranscriptionProvider};
use subforge::ProviderError;

#[tokio::test]
async fn test_mockTranscriber_withWorkingBehavior_shouldReturnCannedSegments() {
    let provider = MockTranscriber::working();

    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();

    assert_eq!(transcript.segments.len(), 2);
    assert_eq!(transcript.language.as_deref(), Some("en"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_mockTranscriber_withLanguageHint_shouldEchoItBack() {
    let provider = MockTranscriber::working();

    let transcript = provider
        .transcribe(Path::new("unused.wav"), Some("zh"))
        .await
        .unwrap();

    assert_eq!(transcript.language.as_deref(), Some("zh"));
}

#[tokio::test]
async fn test_mockTranscriber_withEmptyBehavior_shouldReturnNoSegments() {
    let provider = MockTranscriber::empty();

    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();

    assert!(transcript.segments.is_empty());
    assert!(transcript.language.is_none());
}

#[tokio::test]
async fn test_mockTranscriber_withFailingBehavior_shouldReturnRequestError() {
    let provider = MockTranscriber::failing();

    let result = provider.transcribe(Path::new("unused.wav"), None).await;

    assert!(matches!(result, Err(ProviderError::RequestFailed(_))));
    assert!(provider.test_connection().await.is_err());
}

#[tokio::test]
async fn test_mockTranscriber_withCustomSegments_shouldReturnThemInOrder() {
    let segments = vec![
        TimedSegment {
            start_seconds: 0.0,
            end_seconds: 1.0,
            text: "first".to_string(),
        },
        TimedSegment {
            start_seconds: 1.0,
            end_seconds: 2.0,
            text: "second".to_string(),
        },
    ];
    let provider = MockTranscriber::with_segments(segments.clone()).with_language("fr");

    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();

    assert_eq!(transcript.segments, segments);
    assert_eq!(transcript.language.as_deref(), Some("fr"));
}
