use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::{SoundBank, SoundCue};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

const SFX_VOLUME: f32 = 0.6;

/// WAV clips for the three cues, kept in memory and decoded per play
pub struct Sfx {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: HashMap<SoundCue, Arc<[u8]>>,
}

impl Sfx {
    /// Read and validate every clip, then open the default output device
    pub fn load(dir: &Path) -> Result<Self> {
        let mut clips = HashMap::new();
        for cue in SoundCue::ALL {
            let path = dir.join(cue.file_name());
            let bytes: Arc<[u8]> = fs::read(&path)
                .with_context(|| format!("reading {}", path.display()))?
                .into();
            Decoder::new(Cursor::new(bytes.clone()))
                .with_context(|| format!("decoding {}", path.display()))?;
            clips.insert(cue, bytes);
        }

        let (stream, handle) = OutputStream::try_default().context("opening audio output")?;
        Ok(Self {
            _stream: stream,
            handle,
            clips,
        })
    }
}

impl SoundBank for Sfx {
    fn play(&self, cue: SoundCue) {
        let Some(clip) = self.clips.get(&cue) else {
            return;
        };
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(SFX_VOLUME);

        let Ok(source) = Decoder::new(Cursor::new(clip.clone())) else {
            return;
        };
        sink.append(source);
        sink.detach();
    }
}

/// Probe audio once at startup. Any failure disables sound for the session.
pub fn probe(dir: &Path) -> Option<Box<dyn SoundBank>> {
    match Sfx::load(dir) {
        Ok(sfx) => {
            log::info!("Loaded sound effects from {}", dir.display());
            Some(Box::new(sfx))
        }
        Err(err) => {
            log::warn!(
                "Sound disabled ({err:#}). Place paddle_hit.wav, wall_bounce.wav and score.wav inside {}",
                dir.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_assets_fail_to_load() {
        let dir = Path::new("definitely/not/a/sounds/dir");
        let err = Sfx::load(dir).err().expect("load should fail");
        assert!(format!("{err:#}").contains("paddle_hit.wav"));
    }

    #[test]
    fn test_probe_degrades_to_silence() {
        assert!(probe(Path::new("definitely/not/a/sounds/dir")).is_none());
    }

    #[test]
    fn test_bundled_assets_decode() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/sounds");
        for cue in SoundCue::ALL {
            let bytes = fs::read(dir.join(cue.file_name())).unwrap();
            assert!(
                Decoder::new(Cursor::new(bytes)).is_ok(),
                "{} should be a playable WAV",
                cue.file_name()
            );
        }
    }

    #[test]
    fn test_undecodable_asset_fails_to_load() {
        let dir = std::env::temp_dir().join(format!("pong-sfx-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for cue in SoundCue::ALL {
            fs::write(dir.join(cue.file_name()), b"not a wav file").unwrap();
        }

        let err = Sfx::load(&dir).err().expect("load should fail");
        assert!(format!("{err:#}").contains("decoding"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
