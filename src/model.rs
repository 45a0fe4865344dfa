//! The order-k n-gram context model counter.
//!
//! For every character position the model records which lowercased character
//! follows each context of length 0 through k starting there. It is pure
//! bookkeeping used to estimate how large a context-mixing model of the
//! corpus would be; the encoders never consume it.

use hashbrown::HashMap;

//==================================================================================
// 1. Core Types
//==================================================================================

/// Successor statistics for one context string.
#[derive(Debug, Clone)]
pub struct ContextModel {
    context: String,
    occurrences: u64,
    successors: HashMap<char, u64>,
}

impl ContextModel {
    fn new(context: String) -> Self {
        Self {
            context,
            occurrences: 0,
            successors: HashMap::new(),
        }
    }

    fn add_occurrence(&mut self, next: char) {
        self.occurrences += 1;
        *self.successors.entry(next).or_insert(0) += 1;
    }

    /// How many times this context was seen.
    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }

    /// How many distinct characters were observed after this context.
    pub fn distinct_successors(&self) -> usize {
        self.successors.len()
    }

    /// The number of times `next` followed this context.
    pub fn successor_count(&self, next: char) -> u64 {
        self.successors.get(&next).copied().unwrap_or(0)
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Builds the context models of order 0 through `order` for `text`.
///
/// Contexts and successors are lowercased. The empty context records the
/// character at every position; a context of length j starting at position i
/// records the character at position i + j, when one exists.
pub fn build_context_models(text: &[char], order: usize) -> HashMap<String, ContextModel> {
    fn record(models: &mut HashMap<String, ContextModel>, context: &str, next: char) {
        models
            .entry_ref(context)
            .or_insert_with(|| ContextModel::new(context.to_string()))
            .add_occurrence(next);
    }

    let mut models: HashMap<String, ContextModel> = HashMap::new();
    for i in 0..text.len() {
        let mut context = String::new();
        record(&mut models, &context, lowercased(text[i]));
        for j in i..(i + order).min(text.len()) {
            context.extend(text[j].to_lowercase());
            if j + 1 < text.len() {
                record(&mut models, &context, lowercased(text[j + 1]));
            }
        }
    }
    models
}

/// Estimates the serialized size of the models in bytes: per model, the
/// context characters, a 4-byte occurrence counter, and 1 + 4 bytes per
/// distinct successor.
pub fn serialized_size(models: &HashMap<String, ContextModel>) -> usize {
    models
        .values()
        .map(|m| m.context.chars().count() + 4 + m.distinct_successors() * 5)
        .sum()
}

fn lowercased(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_empty_context_counts_every_position() {
        let text = chars("AbAb");
        let models = build_context_models(&text, 2);
        let root = &models[""];
        assert_eq!(root.occurrences(), 4);
        assert_eq!(root.distinct_successors(), 2);
        assert_eq!(root.successor_count('a'), 2);
        assert_eq!(root.successor_count('b'), 2);
    }

    #[test]
    fn test_contexts_record_lowercased_successors() {
        let text = chars("aBab");
        let models = build_context_models(&text, 2);
        // "ab" occurs at positions 0 and 2; only the first has a successor.
        let ab = &models["ab"];
        assert_eq!(ab.occurrences(), 1);
        assert_eq!(ab.successor_count('a'), 1);
        // Single-character context "a": followed by 'b' both times.
        let a = &models["a"];
        assert_eq!(a.successor_count('b'), 2);
    }

    #[test]
    fn test_order_bounds_context_length() {
        let text = chars("hello");
        let models = build_context_models(&text, 2);
        assert!(models.keys().all(|k| k.chars().count() <= 2));
        assert!(models.contains_key("he"));
        assert!(!models.contains_key("hel"));
    }

    #[test]
    fn test_serialized_size_estimate() {
        let text = chars("aa");
        let models = build_context_models(&text, 1);
        // "" seen twice with one distinct successor: 0 + 4 + 5 = 9.
        // "a" at position 0 records successor 'a'; at position 1 the final
        // character has no successor: 1 + 4 + 5 = 10.
        assert_eq!(serialized_size(&models), 19);
    }

    #[test]
    fn test_empty_text_builds_no_models() {
        let models = build_context_models(&[], 3);
        assert!(models.is_empty());
        assert_eq!(serialized_size(&models), 0);
    }
}
