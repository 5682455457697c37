use crate::fragment::Node;
use crate::patterns::PatternSet;

/// Semantic field a rule classifies nodes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Price,
    Name,
    Brand,
}

/// How competing winning nodes for the same field are resolved within
/// one traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Later matches overwrite earlier ones
    LastWins,

    /// A new match replaces the current value only when strictly longer
    LongestWins,
}

/// One entry of the ordered classification policy.
///
/// `claims` decides whether a node belongs to this field's branch at all;
/// once a node is claimed it is not evaluated against later rules, even if
/// `admits` then rejects the assignment. Keeping the two predicates apart
/// makes that consumed-but-rejected case explicit.
pub struct FieldRule {
    pub field: Field,
    pub tie_break: TieBreak,

    /// Branch predicate over (patterns, node, normalized text)
    pub claims: fn(&PatternSet, &Node, &str) -> bool,

    /// Assignment guard applied after the node is claimed
    pub admits: fn(&PatternSet, &Node, &str) -> bool,
}

/// The classification policy, in evaluation order: price, then name, then
/// brand. Tie-breaks are deliberately uneven (last-wins for price and
/// brand, longest-wins for name) because downstream consumers depend on
/// the resulting output shape.
pub fn rule_table() -> [FieldRule; 3] {
    [
        FieldRule {
            field: Field::Price,
            tie_break: TieBreak::LastWins,
            claims: |patterns, node, normalized| {
                (patterns.matches_price(normalized)
                    || patterns.has_price_class(&node.class_name))
                    && normalized.chars().count() <= 20
            },
            admits: |patterns, _node, normalized| !patterns.has_weekday_token(normalized),
        },
        FieldRule {
            field: Field::Name,
            tie_break: TieBreak::LongestWins,
            claims: |patterns, node, normalized| {
                (patterns.matches_name(normalized)
                    || patterns.has_name_class(&node.class_name)
                    || node.is_heading())
                    && normalized.chars().count() > 10
            },
            admits: |_patterns, _node, _normalized| true,
        },
        FieldRule {
            field: Field::Brand,
            tie_break: TieBreak::LastWins,
            claims: |patterns, node, normalized| {
                (patterns.matches_brand(normalized)
                    || patterns.has_brand_class(&node.class_name))
                    && normalized.chars().count() < 20
            },
            admits: |patterns, _node, normalized| {
                !patterns.has_brand_noise(normalized)
                    && !patterns.has_weekday_token(normalized)
            },
        },
    ]
}
