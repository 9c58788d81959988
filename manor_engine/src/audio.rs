//! Audio sinks.
//!
//! Sounds are requested by [`SoundId`] and are strictly best effort: a missing
//! asset, a machine without an output device, or a build without the `audio`
//! feature all turn playback into a logged no-op. Nothing here ever returns an
//! error to the game.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every sound the game knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    MenuTheme,
    GameLoop,
    Key,
    DoorBedroom,
    CardGained,
    Win,
    Jumpscare,
}
impl SoundId {
    pub const ALL: [SoundId; 7] = [
        SoundId::MenuTheme,
        SoundId::GameLoop,
        SoundId::Key,
        SoundId::DoorBedroom,
        SoundId::CardGained,
        SoundId::Win,
        SoundId::Jumpscare,
    ];

    /// Asset file name, relative to the audio directory.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundId::MenuTheme => "menu_theme.wav",
            SoundId::GameLoop => "game_loop.wav",
            SoundId::Key => "Key.wav",
            SoundId::DoorBedroom => "door_bedroom.wav",
            SoundId::CardGained => "card_gained.wav",
            SoundId::Win => "win.wav",
            SoundId::Jumpscare => "jumpscare.wav",
        }
    }
}

/// Everything the game asks of an audio backend.
pub trait AudioSink {
    /// Loop a background track. Asking for the track already playing does nothing;
    /// asking for a different one stops the current track first.
    fn play_music(&mut self, id: SoundId);
    fn stop_music(&mut self);
    /// Fire-and-forget sound effect.
    fn play_sfx(&mut self, id: SoundId);
}

/// Reasons a sound could not be played. Logged, never surfaced to the game.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no asset for {id:?} at '{}'", .path.display())]
    MissingAsset { id: SoundId, path: PathBuf },
    #[error("audio output unavailable: {0}")]
    Device(String),
    #[error("could not open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode '{}': {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
}

/// Sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_music(&mut self, id: SoundId) {
        debug!("silent audio: music {id:?}");
    }

    fn stop_music(&mut self) {
        debug!("silent audio: stop music");
    }

    fn play_sfx(&mut self, id: SoundId) {
        debug!("silent audio: sfx {id:?}");
    }
}

/// Sink backed by sound files in a directory.
///
/// Assets are resolved on every request. Actual output requires the `audio`
/// feature; without it the sink still tracks which track "is playing".
#[derive(Debug)]
pub struct AssetAudio {
    base_dir: PathBuf,
    current_music: Option<SoundId>,
    output: Option<playback::Playback>,
}
impl AssetAudio {
    /// Open the default output device, if there is one.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let output = match playback::Playback::open() {
            Ok(output) => Some(output),
            Err(e) => {
                info!("{e}; sounds will be skipped");
                None
            },
        };
        Self {
            base_dir: base_dir.into(),
            current_music: None,
            output,
        }
    }

    /// An asset-resolving sink that never touches an output device.
    pub fn without_output(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            current_music: None,
            output: None,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn current_music(&self) -> Option<SoundId> {
        self.current_music
    }

    /// Full path of the asset for `id`, if the file exists.
    ///
    /// # Errors
    /// - `AudioError::MissingAsset` if there is no such file
    pub fn resolve(&self, id: SoundId) -> Result<PathBuf, AudioError> {
        let path = self.base_dir.join(id.file_name());
        if path.is_file() {
            Ok(path)
        } else {
            Err(AudioError::MissingAsset { id, path })
        }
    }

    fn try_play_music(&mut self, id: SoundId) -> Result<(), AudioError> {
        let path = self.resolve(id)?;
        if self.current_music == Some(id) {
            return Ok(());
        }
        self.stop_music();
        if let Some(output) = self.output.as_mut() {
            output.loop_file(&path)?;
        }
        info!("music: now looping {id:?}");
        self.current_music = Some(id);
        Ok(())
    }

    fn try_play_sfx(&mut self, id: SoundId) -> Result<(), AudioError> {
        let path = self.resolve(id)?;
        if let Some(output) = self.output.as_ref() {
            output.one_shot(&path)?;
        }
        debug!("sfx: {id:?}");
        Ok(())
    }
}

impl AudioSink for AssetAudio {
    fn play_music(&mut self, id: SoundId) {
        if let Err(e) = self.try_play_music(id) {
            log_audio_error(&e);
        }
    }

    fn stop_music(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.stop();
        }
        self.current_music = None;
    }

    fn play_sfx(&mut self, id: SoundId) {
        if let Err(e) = self.try_play_sfx(id) {
            log_audio_error(&e);
        }
    }
}

impl Drop for AssetAudio {
    fn drop(&mut self) {
        self.stop_music();
    }
}

fn log_audio_error(e: &AudioError) {
    match e {
        AudioError::MissingAsset { .. } => debug!("{e}"),
        _ => warn!("{e}"),
    }
}

/// One call made on a [`RecordingAudio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Music(SoundId),
    StopMusic,
    Sfx(SoundId),
}

/// Silent sink that remembers what it was asked to play.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    log: Rc<RefCell<Vec<SoundEvent>>>,
}
impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded events.
    pub fn log(&self) -> Rc<RefCell<Vec<SoundEvent>>> {
        Rc::clone(&self.log)
    }
}

impl AudioSink for RecordingAudio {
    fn play_music(&mut self, id: SoundId) {
        self.log.borrow_mut().push(SoundEvent::Music(id));
    }

    fn stop_music(&mut self) {
        self.log.borrow_mut().push(SoundEvent::StopMusic);
    }

    fn play_sfx(&mut self, id: SoundId) {
        self.log.borrow_mut().push(SoundEvent::Sfx(id));
    }
}

#[cfg(feature = "audio")]
mod playback {
    use std::fmt;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

    use super::AudioError;

    /// Live connection to the default output device.
    pub struct Playback {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        music: Option<Sink>,
    }
    impl fmt::Debug for Playback {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Playback")
                .field("music_playing", &self.music.is_some())
                .finish_non_exhaustive()
        }
    }
    impl Playback {
        pub fn open() -> Result<Self, AudioError> {
            let (stream, handle) = OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
            Ok(Self {
                _stream: stream,
                handle,
                music: None,
            })
        }

        pub fn loop_file(&mut self, path: &Path) -> Result<(), AudioError> {
            let sink = Sink::try_new(&self.handle).map_err(|e| AudioError::Device(e.to_string()))?;
            sink.append(decode(path)?.repeat_infinite());
            self.music = Some(sink);
            Ok(())
        }

        pub fn one_shot(&self, path: &Path) -> Result<(), AudioError> {
            let sink = Sink::try_new(&self.handle).map_err(|e| AudioError::Device(e.to_string()))?;
            sink.append(decode(path)?);
            sink.detach();
            Ok(())
        }

        pub fn stop(&mut self) {
            if let Some(sink) = self.music.take() {
                sink.stop();
            }
        }
    }

    fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(not(feature = "audio"))]
mod playback {
    use std::path::Path;

    use super::AudioError;

    /// Uninhabited: without the `audio` feature there is never an output device.
    #[derive(Debug)]
    pub enum Playback {}
    impl Playback {
        pub fn open() -> Result<Self, AudioError> {
            Err(AudioError::Device("built without the `audio` feature".to_string()))
        }

        pub fn loop_file(&mut self, _path: &Path) -> Result<(), AudioError> {
            match *self {}
        }

        pub fn one_shot(&self, _path: &Path) -> Result<(), AudioError> {
            match *self {}
        }

        pub fn stop(&mut self) {
            match *self {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn asset_dir_with(ids: &[SoundId]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for id in ids {
            fs::write(dir.path().join(id.file_name()), b"RIFF").unwrap();
        }
        dir
    }

    #[test]
    fn file_names_are_unique() {
        let names: std::collections::HashSet<_> = SoundId::ALL.iter().map(|id| id.file_name()).collect();
        assert_eq!(names.len(), SoundId::ALL.len());
    }

    #[test]
    fn key_asset_keeps_its_capitalised_name() {
        let dir = asset_dir_with(&[SoundId::Key]);
        assert!(dir.path().join("Key.wav").is_file());
        let audio = AssetAudio::without_output(dir.path());
        assert_eq!(audio.resolve(SoundId::Key).unwrap(), dir.path().join("Key.wav"));
    }

    #[test]
    fn missing_asset_is_a_silent_noop() {
        let dir = asset_dir_with(&[]);
        let mut audio = AssetAudio::without_output(dir.path());
        assert!(matches!(
            audio.resolve(SoundId::Win),
            Err(AudioError::MissingAsset { id: SoundId::Win, .. })
        ));
        audio.play_music(SoundId::MenuTheme);
        audio.play_sfx(SoundId::Win);
        assert_eq!(audio.current_music(), None);
    }

    #[test]
    fn switching_music_replaces_current_track() {
        let dir = asset_dir_with(&[SoundId::MenuTheme, SoundId::GameLoop]);
        let mut audio = AssetAudio::without_output(dir.path());
        audio.play_music(SoundId::MenuTheme);
        assert_eq!(audio.current_music(), Some(SoundId::MenuTheme));
        audio.play_music(SoundId::MenuTheme);
        assert_eq!(audio.current_music(), Some(SoundId::MenuTheme));
        audio.play_music(SoundId::GameLoop);
        assert_eq!(audio.current_music(), Some(SoundId::GameLoop));
        audio.stop_music();
        assert_eq!(audio.current_music(), None);
    }

    #[test]
    fn missing_track_keeps_previous_music() {
        let dir = asset_dir_with(&[SoundId::MenuTheme]);
        let mut audio = AssetAudio::without_output(dir.path());
        audio.play_music(SoundId::MenuTheme);
        audio.play_music(SoundId::GameLoop);
        assert_eq!(audio.current_music(), Some(SoundId::MenuTheme));
    }

    #[test]
    fn recording_audio_keeps_call_order() {
        let mut audio = RecordingAudio::new();
        let log = audio.log();
        audio.play_music(SoundId::GameLoop);
        audio.play_sfx(SoundId::CardGained);
        audio.stop_music();
        assert_eq!(
            *log.borrow(),
            vec![
                SoundEvent::Music(SoundId::GameLoop),
                SoundEvent::Sfx(SoundId::CardGained),
                SoundEvent::StopMusic
            ]
        );
    }
}
