pub mod config;
pub use config::EmotionSnifferConfig;

pub mod emotion;
pub use emotion::Emotion;

pub mod emotion_vector;
pub use emotion_vector::EmotionVector;

pub mod lexicon;
pub use lexicon::Lexicon;

pub mod text_record;
pub use text_record::{CategoryFilter, TextRecord};

pub mod emotion_classifier;
pub use emotion_classifier::EmotionClassifier;

pub mod emotion_report;
pub use emotion_report::EmotionReport;

pub mod error;
pub use error::Error;
