pub mod audio_file;
mod connector_factory;
mod elevenlabs_detector;
mod gemini_detector;
pub mod language;
mod mock_detector;
mod openai_whisper_detector;
mod pricing;
mod sarvam_detector;
mod vendor_response;

pub use connector_factory::{ConnectorFactory, ConnectorFactoryError};
pub use elevenlabs_detector::ElevenLabsDetector;
pub use gemini_detector::GeminiDetector;
pub use mock_detector::MockDetector;
pub use openai_whisper_detector::OpenAiWhisperDetector;
pub use pricing::Pricing;
pub use sarvam_detector::SarvamDetector;
