use wordbook_types::WordRecord;

/// Shown when the definition request fails or returns nothing usable.
pub const NO_DEFINITION: &str = "No definition available";

/// Observable output of the lookup service. The service loop owns the live
/// copy and publishes cloned snapshots on a watch channel; observers never
/// mutate it.
#[derive(Debug, Clone)]
pub struct LookupState {
    /// Synonyms in the order the service returned them.
    pub primary_synonyms: Vec<WordRecord>,
    /// Same set, ascending by (syllables, frequency).
    pub lyrical_synonyms: Vec<WordRecord>,
    /// Same set, descending by (syllables, frequency).
    pub pretentious_synonyms: Vec<WordRecord>,
    /// Autocomplete words for the current prompt text.
    pub suggestions: Vec<String>,
    /// Gloss of the submitted word, or the placeholder once a definition
    /// response has settled.
    pub current_definition: Option<String>,
    pub is_loading: bool,
    pub network_available: bool,
}

impl Default for LookupState {
    fn default() -> Self {
        Self {
            primary_synonyms: Vec::new(),
            lyrical_synonyms: Vec::new(),
            pretentious_synonyms: Vec::new(),
            suggestions: Vec::new(),
            current_definition: None,
            is_loading: false,
            network_available: true,
        }
    }
}

impl LookupState {
    pub(crate) fn clear_results(&mut self) {
        self.primary_synonyms.clear();
        self.lyrical_synonyms.clear();
        self.pretentious_synonyms.clear();
    }
}
