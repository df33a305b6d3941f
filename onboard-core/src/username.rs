//! Requester extraction from issue titles

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9-]+)").expect("mention pattern is valid"));

/// Return the first `@mention` in `title`, without the sigil
///
/// Case is preserved as written. Only ASCII letters, digits and hyphens
/// count as part of a login. A title without a mention is an error.
pub fn extract_username(title: &str) -> Result<String> {
    MENTION
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::NoUsername {
            title: title.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_mention() {
        assert_eq!(
            extract_username("Add access for @jane-doe99").unwrap(),
            "jane-doe99"
        );
    }

    #[test]
    fn test_first_mention_wins() {
        assert_eq!(extract_username("@first and @second").unwrap(), "first");
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(extract_username("Invite @OctoCat").unwrap(), "OctoCat");
    }

    #[test]
    fn test_stops_at_disallowed_character() {
        assert_eq!(extract_username("(@dev_ops.team)").unwrap(), "dev");
        assert_eq!(extract_username("cc @bob, thanks").unwrap(), "bob");
    }

    #[test]
    fn test_lone_sigil_skipped() {
        assert_eq!(extract_username("@ then @real").unwrap(), "real");
    }

    #[test]
    fn test_no_mention_is_error() {
        let err = extract_username("Please add me").unwrap_err();
        assert!(matches!(err, Error::NoUsername { ref title } if title == "Please add me"));
    }

    #[test]
    fn test_non_ascii_lookalikes_not_matched() {
        // U+017F and U+212A case-fold to `s` and `k` under Unicode rules
        assert!(matches!(
            extract_username("Add @\u{17F}am"),
            Err(Error::NoUsername { .. })
        ));
        assert!(matches!(
            extract_username("Add @\u{212A}ate"),
            Err(Error::NoUsername { .. })
        ));
        assert_eq!(extract_username("Add @\u{17F}am or @sam").unwrap(), "sam");
    }

    #[test]
    fn test_bare_sigil_is_error() {
        assert!(extract_username("@ @!").is_err());
    }
}
