use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use engine::game::Screen;
use engine::log;

use crate::config::AudioSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MusicTrack {
    Title,
    Pause,
    GameplayCalm,
    GameplayDriving,
    EndingSlow,
    EndingHeavy,
}

// (frequency in Hz, length in beats); 0.0 Hz is a rest.
type Melody = &'static [(f32, f32)];

const TITLE_THEME: Melody = &[
    (262.0, 1.0),
    (330.0, 1.0),
    (392.0, 1.0),
    (330.0, 1.0),
    (440.0, 2.0),
    (392.0, 2.0),
    (330.0, 1.0),
    (294.0, 1.0),
    (262.0, 2.0),
    (0.0, 2.0),
];

const PAUSE_THEME: Melody = &[
    (220.0, 2.0),
    (0.0, 1.0),
    (247.0, 2.0),
    (0.0, 1.0),
    (196.0, 2.0),
    (0.0, 3.0),
];

const GAMEPLAY_CALM: Melody = &[
    (330.0, 1.0),
    (392.0, 1.0),
    (440.0, 1.0),
    (392.0, 1.0),
    (330.0, 1.0),
    (294.0, 1.0),
    (330.0, 2.0),
    (0.0, 1.0),
];

const GAMEPLAY_DRIVING: Melody = &[
    (392.0, 0.5),
    (392.0, 0.5),
    (440.0, 0.5),
    (494.0, 0.5),
    (440.0, 0.5),
    (392.0, 0.5),
    (523.0, 1.0),
    (0.0, 0.5),
];

const ENDING_SLOW: Melody = &[
    (392.0, 2.0),
    (370.0, 2.0),
    (349.0, 2.0),
    (330.0, 4.0),
    (0.0, 2.0),
];

const ENDING_HEAVY: Melody = &[
    (196.0, 1.0),
    (185.0, 1.0),
    (175.0, 1.0),
    (165.0, 3.0),
    (0.0, 2.0),
];

const CUE_NORMAL: Melody = &[(660.0, 1.0), (880.0, 1.0)];

const CUE_BONUS: Melody = &[(523.0, 1.0), (659.0, 1.0), (784.0, 1.0), (1047.0, 1.0)];

struct Voice {
    notes: Melody,
    seconds_per_beat: f32,
    level: f32,
    looping: bool,
    note_index: usize,
    seconds_in_note: f32,
    phase: f32,
    finished: bool,
}

impl Voice {
    fn new(notes: Melody, seconds_per_beat: f32, level: f32, looping: bool) -> Self {
        Self {
            notes,
            seconds_per_beat,
            level,
            looping,
            note_index: 0,
            seconds_in_note: 0.0,
            phase: 0.0,
            finished: false,
        }
    }

    fn music(track: MusicTrack) -> Self {
        let (notes, seconds_per_beat) = match track {
            MusicTrack::Title => (TITLE_THEME, 0.35),
            MusicTrack::Pause => (PAUSE_THEME, 0.5),
            MusicTrack::GameplayCalm => (GAMEPLAY_CALM, 0.25),
            MusicTrack::GameplayDriving => (GAMEPLAY_DRIVING, 0.22),
            MusicTrack::EndingSlow => (ENDING_SLOW, 0.6),
            MusicTrack::EndingHeavy => (ENDING_HEAVY, 0.45),
        };
        Self::new(notes, seconds_per_beat, 0.18, true)
    }

    fn cue(bonus: bool) -> Self {
        if bonus {
            Self::new(CUE_BONUS, 0.06, 0.4, false)
        } else {
            Self::new(CUE_NORMAL, 0.07, 0.4, false)
        }
    }

    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        if self.finished {
            return 0.0;
        }

        let (frequency, beats) = self.notes[self.note_index];
        let note_length = beats * self.seconds_per_beat;

        self.seconds_in_note += 1.0 / sample_rate;
        if self.seconds_in_note >= note_length {
            self.seconds_in_note = 0.0;
            self.note_index += 1;
            if self.note_index >= self.notes.len() {
                if self.looping {
                    self.note_index = 0;
                } else {
                    self.finished = true;
                }
            }
            return 0.0;
        }

        if frequency == 0.0 {
            return 0.0;
        }

        self.phase = (self.phase + frequency / sample_rate).fract();
        // Square wave with a per-note decay envelope to avoid clicks.
        let envelope = 1.0 - (self.seconds_in_note / note_length);
        let wave = if self.phase < 0.5 { 1.0 } else { -1.0 };
        wave * envelope * self.level
    }
}

#[derive(Default)]
struct Mixer {
    music: Option<Voice>,
    parked: Option<Voice>,
    cue: Option<Voice>,
    volume: f32,
}

impl Mixer {
    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let mut sample = 0.0;
        if let Some(music) = self.music.as_mut() {
            sample += music.next_sample(sample_rate);
        }
        if let Some(cue) = self.cue.as_mut() {
            sample += cue.next_sample(sample_rate);
            if cue.finished {
                self.cue = None;
            }
        }
        sample * self.volume
    }
}

pub struct AudioPlayer {
    mixer: Arc<Mutex<Mixer>>,
    _stream: Option<cpal::Stream>,
    gameplay_track: Option<MusicTrack>,
    ending_track: Option<MusicTrack>,
}

impl AudioPlayer {
    pub fn new(settings: &AudioSettings) -> Self {
        let mixer = Arc::new(Mutex::new(Mixer {
            volume: settings.volume,
            ..Mixer::default()
        }));

        let stream = if settings.enabled {
            match build_output_stream(Arc::clone(&mixer)) {
                Ok(stream) => Some(stream),
                Err(error) => {
                    log!("Audio disabled: {}", error);
                    None
                }
            }
        } else {
            None
        };

        Self {
            mixer,
            _stream: stream,
            gameplay_track: None,
            ending_track: None,
        }
    }

    pub fn play_eat_cue(&self, bonus: bool) {
        let mut mixer = self.mixer.lock().unwrap();
        mixer.cue = Some(Voice::cue(bonus));
    }

    // One music track per screen. The gameplay and ending tracks are drawn
    // from their two-track pools once per session and rerolled after reset.
    pub fn enter_screen(&mut self, screen: Screen) {
        let mut mixer = self.mixer.lock().unwrap();
        match screen {
            Screen::Title => {
                self.gameplay_track = None;
                self.ending_track = None;
                mixer.parked = None;
                mixer.music = Some(Voice::music(MusicTrack::Title));
            }
            Screen::Gameplay => {
                if let Some(parked) = mixer.parked.take() {
                    mixer.music = Some(parked);
                } else {
                    let track = *self.gameplay_track.get_or_insert_with(|| {
                        if rand::random() {
                            MusicTrack::GameplayCalm
                        } else {
                            MusicTrack::GameplayDriving
                        }
                    });
                    mixer.music = Some(Voice::music(track));
                }
            }
            Screen::Pause => {
                mixer.parked = mixer.music.take();
                mixer.music = Some(Voice::music(MusicTrack::Pause));
            }
            Screen::Ending => {
                mixer.parked = None;
                let track = *self.ending_track.get_or_insert_with(|| {
                    if rand::random() {
                        MusicTrack::EndingSlow
                    } else {
                        MusicTrack::EndingHeavy
                    }
                });
                mixer.music = Some(Voice::music(track));
            }
        }
    }
}

fn build_output_stream(mixer: Arc<Mutex<Mixer>>) -> Result<cpal::Stream, String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| "no output device available".to_string())?;
    let config = device
        .default_output_config()
        .map_err(|e| format!("failed to query output config: {}", e))?;

    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(format!(
            "unsupported sample format {:?}",
            config.sample_format()
        ));
    }

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    let err_fn = |err| eprintln!("audio stream error: {}", err);

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let mut mixer = mixer.lock().unwrap();
                for frame in data.chunks_mut(channels) {
                    let sample = mixer.next_sample(sample_rate);
                    for out in frame.iter_mut() {
                        *out = sample;
                    }
                }
            },
            err_fn,
            None,
        )
        .map_err(|e| format!("failed to build output stream: {}", e))?;

    stream
        .play()
        .map_err(|e| format!("failed to start output stream: {}", e))?;

    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_voice_finishes() {
        let mut voice = Voice::cue(false);
        let sample_rate = 48000.0;
        for _ in 0..48000 {
            voice.next_sample(sample_rate);
        }
        assert!(voice.finished);
    }

    #[test]
    fn test_music_voice_loops() {
        let mut voice = Voice::music(MusicTrack::Pause);
        let sample_rate = 48000.0;
        // Far longer than one pass through the melody.
        for _ in 0..48000 * 12 {
            voice.next_sample(sample_rate);
        }
        assert!(!voice.finished);
    }

    #[test]
    fn test_samples_stay_in_range() {
        let mut voice = Voice::music(MusicTrack::GameplayDriving);
        let sample_rate = 44100.0;
        for _ in 0..44100 {
            let sample = voice.next_sample(sample_rate);
            assert!(sample.abs() <= 1.0);
        }
    }
}
