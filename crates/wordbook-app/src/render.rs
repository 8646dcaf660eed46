use wordbook_lookup::LookupState;
use wordbook_types::WordRecord;

/// Print the definition plus the three ranked views of a settled search.
pub fn print_results(state: &LookupState) {
    if !state.network_available {
        println!("network unavailable, please try again");
        return;
    }

    if let Some(definition) = &state.current_definition {
        println!("definition: {definition}");
    }

    if state.primary_synonyms.is_empty() {
        println!("no synonyms found");
        return;
    }

    print_column("synonyms", &state.primary_synonyms);
    print_column("lyrical", &state.lyrical_synonyms);
    print_column("pretentious", &state.pretentious_synonyms);
}

fn print_column(title: &str, records: &[WordRecord]) {
    println!("\n{title}:");
    for (index, record) in records.iter().enumerate() {
        println!("  [{}] {}", index + 1, record.word);
    }
}

pub fn print_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        return;
    }
    println!("suggestions: {}", suggestions.join(", "));
}
