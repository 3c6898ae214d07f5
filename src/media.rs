use std::path::Path;

use log::{debug, error};
use tokio::process::Command;

use crate::errors::MediaError;

// @module: External media tool invocation (ffmpeg)

// @const: Audio extraction parameters used for transcription input
const AUDIO_SAMPLE_RATE: u32 = 44_000;
const AUDIO_CHANNELS: u32 = 2;
const AUDIO_BITRATE: &str = "128k";

// @const: Time budgets for ffmpeg invocations
const EXTRACT_TIMEOUT_SECS: u64 = 120;
const BURN_TIMEOUT_SECS: u64 = 600;

/// Extract the audio track of a video to a WAV file suitable for
/// transcription.
pub async fn extract_audio<P: AsRef<Path>>(video_path: P, audio_path: P) -> Result<(), MediaError> {
    let video_path = video_path.as_ref();
    let audio_path = audio_path.as_ref();

    if !video_path.exists() {
        return Err(MediaError::MissingInput(video_path.to_path_buf()));
    }

    debug!("Extracting audio from {:?} to {:?}", video_path, audio_path);

    run_ffmpeg(
        &[
            "-y",
            "-i",
            video_path.to_str().unwrap_or_default(),
            "-vn",
            "-ar",
            &AUDIO_SAMPLE_RATE.to_string(),
            "-ac",
            &AUDIO_CHANNELS.to_string(),
            "-b:a",
            AUDIO_BITRATE,
            audio_path.to_str().unwrap_or_default(),
        ],
        EXTRACT_TIMEOUT_SECS,
    )
    .await
}

/// Burn a subtitle file into a video, copying the audio stream as-is.
pub async fn burn_subtitles<P: AsRef<Path>>(
    video_path: P,
    subtitle_path: P,
    output_path: P,
) -> Result<(), MediaError> {
    let video_path = video_path.as_ref();
    let subtitle_path = subtitle_path.as_ref();
    let output_path = output_path.as_ref();

    if !video_path.exists() {
        return Err(MediaError::MissingInput(video_path.to_path_buf()));
    }
    if !subtitle_path.exists() {
        return Err(MediaError::MissingInput(subtitle_path.to_path_buf()));
    }

    debug!(
        "Burning subtitles {:?} into {:?} as {:?}",
        subtitle_path, video_path, output_path
    );

    let filter = format!("subtitles={}", subtitle_path.to_str().unwrap_or_default());

    run_ffmpeg(
        &[
            "-y",
            "-i",
            video_path.to_str().unwrap_or_default(),
            "-vf",
            &filter,
            "-c:a",
            "copy",
            output_path.to_str().unwrap_or_default(),
        ],
        BURN_TIMEOUT_SECS,
    )
    .await
}

/// Run ffmpeg with the given arguments under a hard timeout.
async fn run_ffmpeg(args: &[&str], timeout_secs: u64) -> Result<(), MediaError> {
    let ffmpeg_future = Command::new("ffmpeg").args(args).output();

    let timeout = std::time::Duration::from_secs(timeout_secs);
    let output = tokio::select! {
        result = ffmpeg_future => {
            result.map_err(|e| MediaError::Spawn {
                tool: "ffmpeg".to_string(),
                message: e.to_string(),
            })?
        },
        _ = tokio::time::sleep(timeout) => {
            return Err(MediaError::Timeout {
                tool: "ffmpeg".to_string(),
                timeout_secs,
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let filtered = filter_ffmpeg_stderr(&stderr);
        error!("ffmpeg invocation failed: {}", filtered);
        return Err(MediaError::Failed {
            tool: "ffmpeg".to_string(),
            stderr: filtered,
        });
    }

    Ok(())
}

/// Filter ffmpeg stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_ffmpeg_stderr(stderr: &str) -> String {
    let dominated_prefixes = [
        "ffmpeg version",
        "  built with",
        "  configuration:",
        "  lib",
        "Input #",
        "  Metadata:",
        "  Duration:",
        "  Chapter",
        "    Chapter",
        "  Stream #",
        "      Metadata:",
        "        title",
        "        BPS",
        "        DURATION",
        "        NUMBER_OF",
        "        _STATISTICS",
        "Output #",
        "Stream mapping:",
        "Press [q]",
    ];

    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return false;
            }
            !dominated_prefixes.iter().any(|p| line.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown ffmpeg error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
