//! Producer naming: turns maker names into catalog kinds

/// Prefix that marks a maker as a catalog producer
pub const MAKER_PREFIX: &str = "Make";

/// Convert a CamelCase name to snake_case
///
/// Every uppercase letter after the first character starts a new
/// underscore-delimited word; the result is lowercased. Input that is
/// already lowercase snake_case comes back unchanged.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Derive the catalog kind from a maker name
///
/// Returns `None` when the name does not carry [`MAKER_PREFIX`] or has
/// nothing after it.
pub fn kind_for_maker(maker_name: &str) -> Option<String> {
    maker_name
        .strip_prefix(MAKER_PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(to_snake_case)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_two_words() {
        assert_eq!(to_snake_case("MadCat"), "mad_cat");
    }

    #[test]
    fn test_snake_case_single_word() {
        assert_eq!(to_snake_case("Vulture"), "vulture");
        assert_eq!(to_snake_case("Atlas"), "atlas");
    }

    #[test]
    fn test_snake_case_idempotent_on_snake_case() {
        for name in ["mad_cat", "vulture", "urban_mech_2"] {
            assert_eq!(to_snake_case(name), name);
            assert_eq!(to_snake_case(&to_snake_case(name)), name);
        }
    }

    #[test]
    fn test_snake_case_digits_stay_attached() {
        assert_eq!(to_snake_case("UrbanMech2"), "urban_mech2");
    }

    #[test]
    fn test_kind_for_maker() {
        assert_eq!(kind_for_maker("MakeMadCat").as_deref(), Some("mad_cat"));
        assert_eq!(kind_for_maker("MakeVulture").as_deref(), Some("vulture"));
        assert_eq!(kind_for_maker("BuildAtlas"), None);
        assert_eq!(kind_for_maker("Make"), None);
    }
}
