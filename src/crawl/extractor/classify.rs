//! Dwelling-type inference from free text.

/// Recognized dwelling types as (search term, exported label).
///
/// Order matters: compound terms precede the terms they contain
/// (`villalejlighed` before `villa` and `lejlighed`).
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("villalejlighed", "Villalejlighed"),
    ("husbåd", "Husbåd"),
    ("rækkehus", "Rækkehus"),
    ("ejerlejlighed", "Ejerlejlighed"),
    ("andelsbolig", "Andelsbolig"),
    ("fritidshus", "Fritidshus"),
    ("sommerhus", "Fritidshus"),
    ("landejendom", "Landejendom"),
    ("helårsgrund", "Helårsgrund"),
    ("fritidsgrund", "Fritidsgrund"),
    ("villa", "Villa"),
    ("lejlighed", "Ejerlejlighed"),
];

/// Label of the first vocabulary term found in `name`, else in `description`.
///
/// Matching is case-insensitive substring search.
pub fn classify_property_type(name: &str, description: &str) -> Option<&'static str> {
    [name, description].into_iter().find_map(|text| {
        let text = text.to_lowercase();
        PROPERTY_TYPES
            .iter()
            .find(|(term, _)| text.contains(term))
            .map(|(_, label)| *label)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_checked_before_description() {
        assert_eq!(
            classify_property_type("Husbåd i Nyhavn", "Tidligere villa med udsigt"),
            Some("Husbåd")
        );
    }

    #[test]
    fn test_falls_back_to_description() {
        assert_eq!(
            classify_property_type("Strandvejen 12, 2900 Hellerup", "Rummelig VILLA tæt på vandet"),
            Some("Villa")
        );
    }

    #[test]
    fn test_compound_term_wins_over_contained_term() {
        assert_eq!(
            classify_property_type("Lys villalejlighed", ""),
            Some("Villalejlighed")
        );
    }

    #[test]
    fn test_synonym_maps_to_shared_label() {
        assert_eq!(classify_property_type("Sommerhus ved Skagen", ""), Some("Fritidshus"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify_property_type("N/A", "N/A"), None);
        assert_eq!(classify_property_type("", ""), None);
    }
}
