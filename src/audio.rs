use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;

/// Audio manager for playing sound effects. Every failure mode (no
/// output device, missing sample file) degrades to silence; sound must
/// never take the game down.
pub struct AudioManager {
    /// Kept alive for the duration of the game; dropping it stops output
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    /// Pre-loaded and buffered fire sound (None if loading failed)
    fire_sound: Option<Buffered<Decoder<BufReader<File>>>>,
}

impl AudioManager {
    /// Create a new audio manager and pre-load audio files
    pub fn new() -> Self {
        let (stream, stream_handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(err) => {
                eprintln!("Warning: failed to initialize audio: {err}");
                (None, None)
            }
        };

        // Pre-load and buffer the fire sound at startup
        let fire_sound = File::open("assets/sounds/fire.wav")
            .ok()
            .and_then(|file| Decoder::new(BufReader::new(file)).ok())
            .map(Source::buffered);

        Self {
            _stream: stream,
            stream_handle,
            fire_sound,
        }
    }

    /// Play the weapon fire sound at a low volume
    pub fn play_fire_sound(&self) {
        let (Some(handle), Some(fire_sound)) = (&self.stream_handle, &self.fire_sound) else {
            return;
        };
        // Ignore playback errors - don't want to crash the game
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(0.05);
            // Clone the buffered source (fast - just clones references)
            sink.append(fire_sound.clone());
            sink.detach();
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
