use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use crate::app_config::{Config, TranscriptionBackend};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::media;
use crate::providers::{MockTranscriber, TranscriptionProvider, WhisperApi};
use crate::subtitle::{srt, EntryDraft, EntryView, SubtitleEditor, SubtitleTrack};

// @module: Application controller for subtitle generation and editing

/// What the generate workflow produced
#[derive(Debug)]
pub struct GenerateReport {
    /// Path of the generated subtitle file
    pub subtitle_path: PathBuf,
    /// Path of the burned-in output video, when one was produced
    pub video_path: Option<PathBuf>,
    /// Language the transcription service reported
    pub language: Option<String>,
}

/// Main application controller for subtitle workflows
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Build the transcription provider selected by the configuration
    fn build_provider(&self) -> Box<dyn TranscriptionProvider> {
        let transcription = &self.config.transcription;
        match transcription.backend {
            TranscriptionBackend::WhisperApi => Box::new(WhisperApi::new(
                transcription.endpoint.clone(),
                transcription.model.clone(),
                transcription.api_key.clone(),
                transcription.timeout_secs,
            )),
            TranscriptionBackend::Mock => Box::new(MockTranscriber::working()),
        }
    }

    /// Run the full generation workflow: copy the upload, extract audio,
    /// transcribe, write the subtitle file and, unless `subtitles_only`,
    /// burn it into an output video.
    pub async fn run_generate(
        &self,
        input_file: PathBuf,
        subtitles_only: bool,
    ) -> Result<GenerateReport> {
        let start_time = Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        self.config.ensure_dirs()?;

        let filename = input_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| anyhow!("Input path has no filename: {:?}", input_file))?;

        // Copy the upload under a collision-free name; every derived
        // artifact shares its stem
        let video_path = FileManager::unique_path(&self.config.upload_dir, &filename);
        FileManager::copy_file(&input_file, &video_path)?;

        let base = video_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "video".to_string());

        let progress = step_progress();

        progress.set_message("Extracting audio");
        let audio_path = self.config.audio_dir.join(format!("{}.wav", base));
        media::extract_audio(video_path.as_path(), audio_path.as_path())
            .await
            .context("Audio extraction failed")?;

        progress.set_message("Transcribing audio");
        let provider = self.build_provider();
        let transcript = provider
            .transcribe(&audio_path, self.config.transcription.language.as_deref())
            .await
            .context("Transcription failed")?;

        if let Some(language) = &transcript.language {
            match language_utils::get_language_name(language) {
                Ok(name) => info!("Detected language: {} ({})", name, language),
                Err(_) => info!("Detected language: {}", language),
            }
        }
        if transcript.segments.is_empty() {
            warn!("Transcription returned no segments; subtitle file will be empty");
        }

        progress.set_message("Writing subtitles");
        let track = SubtitleTrack::from_segments(&transcript.segments);
        let subtitle_path = self.config.subtitle_dir.join(format!("{}.srt", base));
        FileManager::write_to_file(&subtitle_path, &srt::serialize(&track))?;
        debug!(
            "Wrote {} subtitle entries to {:?}",
            track.len(),
            subtitle_path
        );

        let video_output = if subtitles_only {
            None
        } else {
            progress.set_message("Burning subtitles into video");
            let output_path = self
                .config
                .output_dir
                .join(format!("{}_with_subtitles.mp4", base));
            media::burn_subtitles(
                video_path.as_path(),
                subtitle_path.as_path(),
                output_path.as_path(),
            )
            .await
            .context("Subtitle burn-in failed")?;
            Some(output_path)
        };

        progress.finish_and_clear();
        info!(
            "Generation finished in {:.1}s ({} entries)",
            start_time.elapsed().as_secs_f64(),
            track.len()
        );

        Ok(GenerateReport {
            subtitle_path,
            video_path: video_output,
            language: transcript.language,
        })
    }

    /// Burn an already-generated subtitle file into its uploaded video.
    ///
    /// `base` is the shared file stem: the workflow expects
    /// `<upload_dir>/<base>.mp4` and `<subtitle_dir>/<base>.srt`.
    pub async fn run_burn(&self, base: &str) -> Result<PathBuf> {
        self.config.ensure_dirs()?;

        let video_path = self.config.upload_dir.join(format!("{}.mp4", base));
        let subtitle_path = self.config.subtitle_dir.join(format!("{}.srt", base));

        if !video_path.exists() {
            return Err(anyhow!("Video file \"{}.mp4\" not found", base));
        }
        if !subtitle_path.exists() {
            return Err(anyhow!("Subtitle file \"{}.srt\" not found", base));
        }

        let output_path = self
            .config
            .output_dir
            .join(format!("{}_with_subtitles.mp4", base));

        let progress = step_progress();
        progress.set_message("Burning subtitles into video");
        media::burn_subtitles(
            video_path.as_path(),
            subtitle_path.as_path(),
            output_path.as_path(),
        )
        .await
        .context("Subtitle burn-in failed")?;
        progress.finish_and_clear();

        Ok(output_path)
    }

    /// List subtitle files available for editing
    pub fn list_subtitles(&self) -> Result<Vec<PathBuf>> {
        if !self.config.subtitle_dir.exists() {
            return Ok(Vec::new());
        }
        FileManager::find_files(&self.config.subtitle_dir, "srt")
    }

    /// Load a subtitle file and return its entry views.
    ///
    /// A fresh editor is constructed per call; nothing is cached across
    /// operations.
    pub fn show_subtitles(&self, filename: &str) -> Result<Vec<EntryView>> {
        let path = self.subtitle_path(filename)?;

        let mut editor = SubtitleEditor::new();
        editor.load(&path)?;
        Ok(editor.export_view())
    }

    /// Replace a subtitle file's entries with an ordered draft list and save
    pub fn apply_edits(&self, filename: &str, drafts: Vec<EntryDraft>) -> Result<usize> {
        let path = self.subtitle_path(filename)?;

        let mut editor = SubtitleEditor::new();
        editor.apply_bulk(drafts);
        editor.save(&path)?;

        let count = editor.track().len();
        info!("Saved {} entries to {:?}", count, path);
        Ok(count)
    }

    /// Grammar check for a single timecode string
    pub fn validate_time(&self, text: &str) -> bool {
        SubtitleEditor::new().validate_time(text)
    }

    /// Resolve an editable subtitle filename against the subtitle directory
    fn subtitle_path(&self, filename: &str) -> Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| anyhow!("Invalid subtitle filename: {:?}", filename))?;
        Ok(self.config.subtitle_dir.join(name))
    }
}

/// Spinner used to narrate workflow steps
fn step_progress() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(120));
    progress
}
