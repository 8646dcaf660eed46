use serde::{Deserialize, Serialize};

/// One entry of the Datamuse `/words` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(rename = "numSyllables", default, skip_serializing_if = "Option::is_none")]
    pub num_syllables: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defs: Option<Vec<String>>,
}

impl WordRecord {
    /// Definition strings arrive as `"<part-of-speech>\t<gloss>"`; only the
    /// gloss is shown to the user.
    pub fn first_gloss(&self) -> Option<&str> {
        let def = self.defs.as_ref()?.first()?;
        def.rsplit('\t').next()
    }
}

/// One entry of the Datamuse `/sug` autocomplete response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
}
