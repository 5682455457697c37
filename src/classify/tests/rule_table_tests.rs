use crate::classify::rules::{Field, TieBreak, rule_table};
use crate::fragment::Node;
use crate::patterns::PatternSet;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_and_tie_breaks() {
        let table = rule_table();

        assert_eq!(table[0].field, Field::Price);
        assert_eq!(table[1].field, Field::Name);
        assert_eq!(table[2].field, Field::Brand);

        assert_eq!(table[0].tie_break, TieBreak::LastWins);
        assert_eq!(table[1].tie_break, TieBreak::LongestWins);
        assert_eq!(table[2].tie_break, TieBreak::LastWins);
    }

    #[test]
    fn test_price_rule_predicates() {
        let patterns = PatternSet::default();
        let [price, _, _] = rule_table();

        let priced = Node::new("$19.99", "", "span");
        assert!((price.claims)(&patterns, &priced, &priced.normalized_text()));

        // Class keyword alone selects the branch
        let classed = Node::new("19.99", "a-price-whole", "span");
        assert!((price.claims)(&patterns, &classed, &classed.normalized_text()));

        // Length cap is part of branch selection
        let long = Node::new("$19.99 with bonus gift inside", "", "span");
        assert!(!(price.claims)(&patterns, &long, &long.normalized_text()));

        // The weekday guard rejects after the branch is claimed
        let dated = Node::new("$5 off until Fri", "", "span");
        assert!((price.claims)(&patterns, &dated, &dated.normalized_text()));
        assert!(!(price.admits)(&patterns, &dated, &dated.normalized_text()));
    }

    #[test]
    fn test_name_rule_predicates() {
        let patterns = PatternSet::default();
        let [_, name, _] = rule_table();

        let heading = Node::new("Wireless Mouse Deluxe Edition", "", "h2");
        assert!((name.claims)(&patterns, &heading, &heading.normalized_text()));

        // Headings still need the minimum length
        let short_heading = Node::new("Mouse", "", "h2");
        assert!(!(name.claims)(&patterns, &short_heading, &short_heading.normalized_text()));

        let classed = Node::new("Compact travel charger set", "s-item-name", "div");
        assert!((name.claims)(&patterns, &classed, &classed.normalized_text()));
    }

    #[test]
    fn test_brand_rule_predicates() {
        let patterns = PatternSet::default();
        let [_, _, brand] = rule_table();

        let short_alpha = Node::new("Logitech", "", "span");
        assert!((brand.claims)(&patterns, &short_alpha, &short_alpha.normalized_text()));
        assert!((brand.admits)(&patterns, &short_alpha, &short_alpha.normalized_text()));

        // Noise keywords and weekday tokens reject after claiming
        let noisy = Node::new("Usb", "", "span");
        assert!((brand.claims)(&patterns, &noisy, &noisy.normalized_text()));
        assert!(!(brand.admits)(&patterns, &noisy, &noisy.normalized_text()));

        let weekday = Node::new("Mon", "", "span");
        assert!((brand.claims)(&patterns, &weekday, &weekday.normalized_text()));
        assert!(!(brand.admits)(&patterns, &weekday, &weekday.normalized_text()));
    }
}
