//! Speech output for Saathi.
//!
//! - [`normalize`]: the text pipeline that makes model output TTS-safe
//! - [`synth`]: sinks that speak (or print) the normalized text

pub mod normalize;
pub mod synth;

pub use normalize::{normalize_for_speech, NormalizerOptions, Pass, TextNormalizer, PASSES};
pub use synth::{sink_from_config, EchoSink, SayCommand, SilentSink, SpeechError, SpeechSink};
