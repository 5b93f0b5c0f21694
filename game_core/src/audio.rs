use crate::Events;

/// The three sound effect slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    PaddleHit,
    WallBounce,
    Score,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::PaddleHit, SoundCue::WallBounce, SoundCue::Score];

    /// Asset file the frontend loads for this cue
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::PaddleHit => "paddle_hit.wav",
            SoundCue::WallBounce => "wall_bounce.wav",
            SoundCue::Score => "score.wav",
        }
    }
}

/// Fire-and-forget sound playback
pub trait SoundBank {
    fn play(&self, cue: SoundCue);
}

/// Cues raised by a frame, in playback order
pub fn cues_for(events: &Events) -> Vec<SoundCue> {
    let mut cues = Vec::new();
    if events.wall_bounce {
        cues.push(SoundCue::WallBounce);
    }
    if events.paddle_hit {
        cues.push(SoundCue::PaddleHit);
    }
    if events.scored() {
        cues.push(SoundCue::Score);
    }
    cues
}
