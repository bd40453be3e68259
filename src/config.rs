use crate::models::EmotionSnifferConfig;

pub const DEFAULT_EMOTION_SNIFFER_CONFIG: &EmotionSnifferConfig = &EmotionSnifferConfig {
    lexicon_delimiter: b'\t',
    record_delimiter: b',',
};
