/*!
 * Transcription-to-subtitle generation tests using the mock provider
 */

use std::path::Path;

use subforge::providers::{MockTranscriber, TimedSegment, TranscriptionProvider};
use subforge::subtitle::{srt, SubtitleTrack};

use crate::common;

#[tokio::test]
async fn test_generation_withMockTranscript_shouldProduceParseableSrtFile() {
    let dir = common::create_temp_dir().unwrap();
    let out_path = dir.path().join("generated.srt");

    let provider = MockTranscriber::working();
    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();

    let track = SubtitleTrack::from_segments(&transcript.segments);
    std::fs::write(&out_path, srt::serialize(&track)).unwrap();

    let reloaded = srt::parse_file(&out_path).unwrap();
    assert_eq!(reloaded.to_view(), track.to_view());
    // Canned segment " Hello " arrives trimmed
    assert_eq!(reloaded.to_view()[0].text, "Hello");
}

#[tokio::test]
async fn test_generation_withFractionalSeconds_shouldEncodeTimecodes() {
    let provider = MockTranscriber::with_segments(vec![TimedSegment {
        start_seconds: 3661.234,
        end_seconds: 3725.5,
        text: "One hour in".to_string(),
    }]);

    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();
    let track = SubtitleTrack::from_segments(&transcript.segments);
    let view = track.to_view();

    assert_eq!(view[0].start_time, "01:01:01,234");
    assert_eq!(view[0].end_time, "01:02:05,500");
}

#[tokio::test]
async fn test_generation_withEmptyTranscript_shouldProduceEmptyFile() {
    let dir = common::create_temp_dir().unwrap();
    let out_path = dir.path().join("empty.srt");

    let provider = MockTranscriber::empty();
    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();

    let track = SubtitleTrack::from_segments(&transcript.segments);
    std::fs::write(&out_path, srt::serialize(&track)).unwrap();

    let reloaded = srt::parse_file(&out_path).unwrap();
    assert!(reloaded.is_empty());
}

#[tokio::test]
async fn test_generation_withSegmentsOutOfOrder_shouldPreserveGivenOrder() {
    // Presentation order follows the provider's segment order, even when
    // timing is not monotonic
    let provider = MockTranscriber::with_segments(vec![
        TimedSegment {
            start_seconds: 10.0,
            end_seconds: 11.0,
            text: "later".to_string(),
        },
        TimedSegment {
            start_seconds: 1.0,
            end_seconds: 2.0,
            text: "earlier".to_string(),
        },
    ]);

    let transcript = provider
        .transcribe(Path::new("unused.wav"), None)
        .await
        .unwrap();
    let track = SubtitleTrack::from_segments(&transcript.segments);
    let view = track.to_view();

    assert_eq!(view[0].text, "later");
    assert_eq!(view[0].index, 1);
    assert_eq!(view[1].text, "earlier");
    assert_eq!(view[1].index, 2);
}
