pub struct EmotionSnifferConfig {
    /// Field separator of the lexicon dataset.
    pub lexicon_delimiter: u8,
    /// Field separator of the records dataset.
    pub record_delimiter: u8,
}
