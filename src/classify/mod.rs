pub mod rules;

#[cfg(test)]
mod tests;

use crate::fragment::Node;
use crate::patterns::PatternSet;
use crate::records::{FieldValue, ProductRecord};
use rules::{Field, FieldRule, TieBreak, rule_table};

/// Classifies one fragment's node sequence into a product record.
///
/// A fixed multi-stage pipeline, not a persistent state machine: a primary
/// rule scan over all nodes, then fallback scans and cross-field inference
/// for whatever remained unset. Pure function of its input, so classifying
/// the same fragment twice yields identical records.
pub struct FieldClassifier {
    patterns: PatternSet,
    rules: [FieldRule; 3],
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// The three field slots being competed for during one classification
#[derive(Debug, Default)]
struct FieldSlots {
    price: FieldValue,
    name: FieldValue,
    brand: FieldValue,
}

impl FieldSlots {
    fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Price => &self.price,
            Field::Name => &self.name,
            Field::Brand => &self.brand,
        }
    }

    fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::Price => self.price = value,
            Field::Name => self.name = value,
            Field::Brand => self.brand = value,
        }
    }

    /// Apply a winning node's text to a slot under the rule's tie-break
    fn apply(&mut self, field: Field, tie_break: TieBreak, text: &str) {
        match tie_break {
            TieBreak::LastWins => self.set(field, FieldValue::Found(text.to_string())),
            TieBreak::LongestWins => {
                let replace = match self.get(field) {
                    FieldValue::NotFound => true,
                    FieldValue::Found(current) => {
                        text.chars().count() > current.chars().count()
                    }
                };
                if replace {
                    self.set(field, FieldValue::Found(text.to_string()));
                }
            }
        }
    }
}

impl FieldClassifier {
    pub fn new() -> Self {
        Self {
            patterns: PatternSet::default(),
            rules: rule_table(),
        }
    }

    /// Classify a fragment's ordered node sequence into a record, with each
    /// unresolved field set to the "Not found" sentinel
    pub fn classify(&self, nodes: &[Node]) -> ProductRecord {
        let mut slots = FieldSlots::default();

        // Stage 1: single left-to-right pass, no early exit
        for node in nodes {
            let normalized = node.normalized_text();

            if self.patterns.has_skip_phrase(&normalized) || node.is_anchor() {
                continue;
            }

            // Rules are mutually exclusive branches: the first rule that
            // claims the node consumes it, whether or not it admits it
            for rule in &self.rules {
                if (rule.claims)(&self.patterns, node, &normalized) {
                    if (rule.admits)(&self.patterns, node, &normalized) {
                        slots.apply(rule.field, rule.tie_break, &node.text);
                    }
                    break;
                }
            }
        }

        // Stage 2: fallbacks only for fields the primary scan left unset
        if !slots.name.is_found() {
            slots.name = self.fallback_name(nodes);
        }
        if !slots.price.is_found() {
            slots.price = self.fallback_price(nodes);
        }
        if !slots.brand.is_found() {
            slots.brand = self.fallback_brand(nodes, &slots.name);
        }

        ProductRecord::from_fields(slots.name, slots.brand, slots.price)
    }

    /// First sufficiently long non-noise, non-price, non-anchor node
    fn fallback_name(&self, nodes: &[Node]) -> FieldValue {
        for node in nodes {
            let normalized = node.normalized_text();
            if normalized.chars().count() > 10
                && !self.patterns.matches_price(&normalized)
                && !self.patterns.has_skip_phrase(&normalized)
                && !node.is_anchor()
            {
                return FieldValue::Found(node.text.clone());
            }
        }
        FieldValue::NotFound
    }

    /// First short currency-bearing, non-date, non-anchor node
    fn fallback_price(&self, nodes: &[Node]) -> FieldValue {
        for node in nodes {
            let normalized = node.normalized_text();
            if self.patterns.matches_loose_price(&normalized)
                && normalized.chars().count() <= 20
                && !self.patterns.has_weekday_token(&normalized)
                && !node.is_anchor()
            {
                return FieldValue::Found(node.text.clone());
            }
        }
        FieldValue::NotFound
    }

    /// Infer the brand from the name's leading alphabetic run when the name
    /// is multi-word; otherwise rescan under the primary brand exclusions.
    ///
    /// When a multi-word name has no alphabetic prefix the field stays
    /// unset, it does not fall through to the node scan.
    fn fallback_brand(&self, nodes: &[Node], name: &FieldValue) -> FieldValue {
        if let FieldValue::Found(name) = name {
            if name.contains(' ') {
                let prefix: String = name
                    .chars()
                    .take_while(|c| c.is_ascii_alphabetic())
                    .collect();
                return if prefix.is_empty() {
                    FieldValue::NotFound
                } else {
                    FieldValue::Found(prefix)
                };
            }
        }

        for node in nodes {
            let normalized = node.normalized_text();
            if self.patterns.matches_brand(&normalized)
                && normalized.chars().count() < 20
                && !self.patterns.has_brand_noise(&normalized)
                && !self.patterns.has_weekday_token(&normalized)
                && !node.is_anchor()
            {
                return FieldValue::Found(node.text.clone());
            }
        }
        FieldValue::NotFound
    }
}
