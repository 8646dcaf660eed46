use std::cmp::Ordering;

use wordbook_types::WordRecord;

/// Substitution values for records missing syllable or frequency metadata.
#[derive(Debug, Clone, Copy)]
pub struct MissingPolicy {
    pub syllables: u32,
    pub frequency: f64,
}

/// Unknown frequency counts as zero: treated like the rarest possible word.
pub const LYRICAL: MissingPolicy = MissingPolicy {
    syllables: 0,
    frequency: 0.0,
};

/// Unknown frequency counts as the largest representable value.
pub const PRETENTIOUS: MissingPolicy = MissingPolicy {
    syllables: 0,
    frequency: f64::MAX,
};

fn sort_key(record: &WordRecord, missing: MissingPolicy) -> (u32, f64) {
    (
        record.num_syllables.unwrap_or(missing.syllables),
        record.frequency.unwrap_or(missing.frequency),
    )
}

/// Two-field (syllables, frequency) comparison with an explicit policy for
/// absent metadata.
pub fn compare(a: &WordRecord, b: &WordRecord, missing: MissingPolicy) -> Ordering {
    let (syllables_a, frequency_a) = sort_key(a, missing);
    let (syllables_b, frequency_b) = sort_key(b, missing);
    syllables_a
        .cmp(&syllables_b)
        .then_with(|| frequency_a.total_cmp(&frequency_b))
}

/// Ascending by (syllables, frequency): short common words first.
pub fn rank_lyrical(records: &[WordRecord]) -> Vec<WordRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| compare(a, b, LYRICAL));
    ranked
}

/// Descending by (syllables, frequency): long rare words first.
pub fn rank_pretentious(records: &[WordRecord]) -> Vec<WordRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| compare(b, a, PRETENTIOUS));
    ranked
}
