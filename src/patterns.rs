use regex::Regex;

/// Phrases marking noise nodes (shipping blurbs, ad chrome, stock notices).
/// A node whose normalized text contains any of these is skipped outright.
const SKIP_PHRASES: &[&str] = &[
    "ships to",
    "featured",
    "sponsored",
    "see more",
    "out of stock",
    "add to cart",
    "free shipping",
    "delivery",
    "arrive",
    "get it by",
    "advertisement",
    "promo",
    "deal",
    "delivering to",
];

/// Abbreviated weekday tokens, used to reject delivery-date text that would
/// otherwise pass the price or brand shape checks
const WEEKDAY_TOKENS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Class-attribute keywords signaling a price element
const PRICE_CLASS_KEYWORDS: &[&str] = &["price", "cost", "sale", "amount", "money", "currency"];

/// Class-attribute keywords signaling a product name element
const NAME_CLASS_KEYWORDS: &[&str] = &["title", "name", "product", "item"];

/// Class-attribute keywords signaling a brand element
const BRAND_CLASS_KEYWORDS: &[&str] = &["brand", "by", "vendor", "maker"];

/// Keywords that disqualify a short token from being taken as a brand
const BRAND_NOISE_KEYWORDS: &[&str] = &[
    "sponsored", "usb", "office", "delivery", "ship", "arrive", "ad", "promo",
];

/// Compiled field-signature patterns plus the keyword tables used by the
/// classifier and its fallbacks
#[derive(Debug)]
pub struct PatternSet {
    price: Regex,
    price_loose: Regex,
    name: Regex,
    brand: Regex,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::compile().expect("Built-in field patterns should be valid")
    }
}

impl PatternSet {
    /// Compile the field-signature regexes
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            // Currency symbol followed by digits, optional decimal part
            price: Regex::new(r"[$£€¥₹₨][0-9]+[.,]?[0-9]*")?,
            // Looser form for the fallback scan: symbol + digits is enough
            price_loose: Regex::new(r"[$£€¥₹₨][0-9]+")?,
            // Long alphanumeric-led line, the shape of a product name
            name: Regex::new(r"^[A-Za-z0-9].{10,}$")?,
            // Short all-alphabetic token, the shape of a brand
            brand: Regex::new(r"^[A-Za-z]{2,}$")?,
        })
    }

    pub fn matches_price(&self, normalized: &str) -> bool {
        self.price.is_match(normalized)
    }

    pub fn matches_loose_price(&self, normalized: &str) -> bool {
        self.price_loose.is_match(normalized)
    }

    pub fn matches_name(&self, normalized: &str) -> bool {
        self.name.is_match(normalized)
    }

    pub fn matches_brand(&self, normalized: &str) -> bool {
        self.brand.is_match(normalized)
    }

    pub fn has_skip_phrase(&self, normalized: &str) -> bool {
        SKIP_PHRASES.iter().any(|phrase| normalized.contains(phrase))
    }

    pub fn has_weekday_token(&self, normalized: &str) -> bool {
        WEEKDAY_TOKENS.iter().any(|day| normalized.contains(day))
    }

    pub fn has_brand_noise(&self, normalized: &str) -> bool {
        BRAND_NOISE_KEYWORDS.iter().any(|kw| normalized.contains(kw))
    }

    pub fn has_price_class(&self, class_name: &str) -> bool {
        class_keyword_match(class_name, PRICE_CLASS_KEYWORDS)
    }

    pub fn has_name_class(&self, class_name: &str) -> bool {
        class_keyword_match(class_name, NAME_CLASS_KEYWORDS)
    }

    pub fn has_brand_class(&self, class_name: &str) -> bool {
        class_keyword_match(class_name, BRAND_CLASS_KEYWORDS)
    }
}

fn class_keyword_match(class_name: &str, keywords: &[&str]) -> bool {
    let class_name = class_name.to_lowercase();
    keywords.iter().any(|kw| class_name.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_pattern() {
        let patterns = PatternSet::default();

        assert!(patterns.matches_price("$19.99"));
        assert!(patterns.matches_price("£7"));
        assert!(patterns.matches_price("€1,99"));
        assert!(patterns.matches_price("from ₹499"));

        // Digits without a currency symbol are not a price
        assert!(!patterns.matches_price("19.99"));
        // Symbol without digits is not a price
        assert!(!patterns.matches_price("$ off"));
    }

    #[test]
    fn test_name_pattern() {
        let patterns = PatternSet::default();

        assert!(patterns.matches_name("bluetooth mechanical keyboard rgb"));
        // Must lead with an alphanumeric character
        assert!(!patterns.matches_name("-- special offer today --"));
        // Too short
        assert!(!patterns.matches_name("mouse"));
    }

    #[test]
    fn test_brand_pattern() {
        let patterns = PatternSet::default();

        assert!(patterns.matches_brand("logitech"));
        assert!(patterns.matches_brand("HP"));
        assert!(!patterns.matches_brand("a"));
        assert!(!patterns.matches_brand("brand 123"));
    }

    #[test]
    fn test_skip_phrases() {
        let patterns = PatternSet::default();

        assert!(patterns.has_skip_phrase("ships to united states"));
        assert!(patterns.has_skip_phrase("get it by tuesday"));
        assert!(patterns.has_skip_phrase("today's best deal"));
        assert!(!patterns.has_skip_phrase("wireless mouse"));
    }

    #[test]
    fn test_weekday_tokens() {
        let patterns = PatternSet::default();

        assert!(patterns.has_weekday_token("mon"));
        assert!(patterns.has_weekday_token("arrives friday"));
        // Containment check by design: "money" carries a weekday token
        assert!(patterns.has_weekday_token("money"));
        assert!(!patterns.has_weekday_token("$19.99"));
    }

    #[test]
    fn test_class_keywords() {
        let patterns = PatternSet::default();

        assert!(patterns.has_price_class("a-price-whole"));
        assert!(patterns.has_name_class("s-product-title"));
        assert!(patterns.has_brand_class("PUIS-brand-row"));
        assert!(!patterns.has_price_class("s-image-container"));
    }
}
