// Author: Dustin Pilgrim
// License: MIT

/// Shortest well-formed link: `${` + one section char + `#` + one option char + `}`.
const MIN_LINK_LEN: usize = 6;

/// A `${Section#Option}` reference, borrowing its names from the value text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub section: &'a str,
    pub option: &'a str,
}

/// Extracts the section and option names of a link.
///
/// The split happens at the first `#`; blanks around either name are ignored.
/// Returns `None` for anything that is not a well-formed link. Whether the names
/// exist is decided by the parser against the sections built so far.
pub fn parse_link(text: &str) -> Option<Link<'_>> {
    if text.len() < MIN_LINK_LEN {
        return None;
    }

    let inner = text.strip_prefix("${")?.strip_suffix('}')?;
    let (section, option) = inner.split_once('#')?;

    let section = section.trim_matches([' ', '\t']);
    let option = option.trim_matches([' ', '\t']);
    if section.is_empty() || option.is_empty() {
        return None;
    }

    Some(Link { section, option })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link() {
        assert_eq!(
            parse_link("${Section#Option}"),
            Some(Link { section: "Section", option: "Option" })
        );
    }

    #[test]
    fn test_link_with_blanks_and_colons() {
        assert_eq!(
            parse_link("${ $Section::subsection#Option 3 }"),
            Some(Link { section: "$Section::subsection", option: "Option 3" })
        );
    }

    #[test]
    fn test_split_at_first_hash() {
        assert_eq!(parse_link("${a#b#c}"), Some(Link { section: "a", option: "b#c" }));
    }

    #[test]
    fn test_minimum_length() {
        assert_eq!(parse_link("${a#b}"), Some(Link { section: "a", option: "b" }));
        assert_eq!(parse_link("${a#}"), None);
    }

    #[test]
    fn test_malformed_links() {
        for text in ["$Section#Option}", "${Section#Option", "${SectionOption}", "${#Option}", "${Section#}", "${ # }", "{a#b}"] {
            assert_eq!(parse_link(text), None, "{:?}", text);
        }
    }
}
