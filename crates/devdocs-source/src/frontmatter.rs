//! YAML frontmatter parsing.
//!
//! A document may start with a `---` delimited YAML block carrying its
//! display metadata. Everything after the closing delimiter is the body.

use serde::Deserialize;

/// Fields read from a document's frontmatter.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full: bool,
}

/// Split a document into its raw frontmatter block and body.
///
/// Returns `None` for the block when the document has no frontmatter or the
/// opening delimiter is never closed.
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse a raw frontmatter block.
///
/// An empty block yields the default frontmatter.
pub(crate) fn parse(yaml: &str) -> Result<Frontmatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_without_frontmatter() {
        let (yaml, body) = split("# Title\n\nText");
        assert!(yaml.is_none());
        assert_eq!(body, "# Title\n\nText");
    }

    #[test]
    fn test_split_with_frontmatter() {
        let (yaml, body) = split("---\ntitle: Intro\n---\n# Body\n");
        assert_eq!(yaml, Some("title: Intro\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_crlf() {
        let (yaml, body) = split("---\r\ntitle: Intro\r\n---\r\nBody");
        assert_eq!(yaml, Some("title: Intro\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_unterminated_is_body() {
        let text = "---\ntitle: Intro\nno closing";
        let (yaml, body) = split(text);
        assert!(yaml.is_none());
        assert_eq!(body, text);
    }

    #[test]
    fn test_split_empty_block() {
        let (yaml, body) = split("---\n---\nBody");
        assert_eq!(yaml, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_all_fields() {
        let fm = parse("title: Intro\ndescription: Getting started\nfull: true\n").unwrap();
        assert_eq!(
            fm,
            Frontmatter {
                title: Some("Intro".to_owned()),
                description: Some("Getting started".to_owned()),
                full: true,
            }
        );
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let fm = parse("title: Intro\nicon: Rocket\n").unwrap();
        assert_eq!(fm.title, Some("Intro".to_owned()));
        assert!(!fm.full);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("  \n").unwrap(), Frontmatter::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("title: [unclosed").is_err());
    }
}
