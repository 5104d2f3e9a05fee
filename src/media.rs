//! Media acquisition - the boundary where files and recordings become
//! resource handles.
//!
//! Picking a file or recording a clip is asynchronous on the host side; the
//! engine only sees the finished outcome, either an [`AcquiredMedia`] or an
//! [`AcquisitionError`].

use crate::error::AcquisitionError;
use crate::types::MediaHandle;

/// What the host is asked to acquire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRequest {
    ImageFile,
    AudioFile,
    VideoFile,
    Microphone,
}

impl MediaRequest {
    /// MIME filter for a file picker, None for microphone capture
    pub fn accept(&self) -> Option<&'static str> {
        match self {
            MediaRequest::ImageFile => Some("image/*"),
            MediaRequest::AudioFile => Some("audio/*"),
            MediaRequest::VideoFile => Some("video/*"),
            MediaRequest::Microphone => None,
        }
    }
}

/// A resource produced by the host, with the picked file's name if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredMedia {
    pub handle: MediaHandle,
    pub name: Option<String>,
}

impl AcquiredMedia {
    pub fn new(handle: MediaHandle) -> Self {
        Self { handle, name: None }
    }

    pub fn named(handle: MediaHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: Some(name.into()),
        }
    }

    /// The file name, or `fallback` when there is none
    pub fn title_or(&self, fallback: &str) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Host-side media acquisition.
///
/// Implementations block (or are driven to completion) before returning;
/// the engine never awaits.
pub trait MediaSource {
    fn acquire(&mut self, request: MediaRequest) -> Result<AcquiredMedia, AcquisitionError>;
}

/// Voice recorder status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
    /// Recording could not start or finish; holds the message for the user
    Error(String),
}

/// Tracks a microphone recording from permission request to finished clip.
#[derive(Debug, Default)]
pub struct VoiceRecorder {
    state: RecorderState,
}

impl VoiceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    /// Start recording once the host reports the microphone outcome.
    pub fn start(&mut self, permission: Result<(), AcquisitionError>) -> Result<(), AcquisitionError> {
        if self.is_recording() {
            return Ok(());
        }
        match permission {
            Ok(()) => {
                self.state = RecorderState::Recording;
                tracing::debug!("Voice recording started");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Voice recording could not start");
                self.state = RecorderState::Error(err.to_string());
                Err(err)
            }
        }
    }

    /// Finish recording with the host's encoded clip.
    pub fn stop(
        &mut self,
        clip: Result<MediaHandle, AcquisitionError>,
    ) -> Result<MediaHandle, AcquisitionError> {
        if !self.is_recording() {
            return Err(AcquisitionError::Failed("not recording".to_string()));
        }
        match clip {
            Ok(handle) => {
                self.state = RecorderState::Idle;
                Ok(handle)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Voice recording failed");
                self.state = RecorderState::Error(err.to_string());
                Err(err)
            }
        }
    }
}
