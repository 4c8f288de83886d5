//! Brick library filtering and the starter content seeded into an empty
//! library.

use crate::brick::{Brick, BrickMetadata, BrickType, NewBrick};
use crate::error::CoreError;
use crate::types::Timestamp;

/// Sentinel accepted by the `type` filter meaning "no type filter".
pub const TYPE_FILTER_ALL: &str = "all";

/// Parse a `type` query parameter. Absent, blank, or `all` means no filter.
pub fn parse_type_filter(raw: Option<&str>) -> Result<Option<BrickType>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") | Some(TYPE_FILTER_ALL) => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Keep only bricks matching the optional type and search filters.
///
/// The search is a case-insensitive substring match over content and tags;
/// a blank query matches everything.
pub fn filter_bricks(
    bricks: Vec<Brick>,
    brick_type: Option<BrickType>,
    search: Option<&str>,
) -> Vec<Brick> {
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    bricks
        .into_iter()
        .filter(|b| brick_type.map_or(true, |t| b.brick_type() == t))
        .filter(|b| needle.as_deref().map_or(true, |n| b.matches(n)))
        .collect()
}

/// Starter bricks for an empty library.
pub fn sample_bricks(now: Timestamp) -> Vec<Brick> {
    vec![
        Brick::create(
            NewBrick::new(
                BrickType::Text,
                "Platform introduction",
                "Welcome to Content LEGO! Assemble reusable content bricks into finished pieces.",
            )
            .with_tags(["welcome", "intro"]),
            now,
        ),
        Brick::create(
            NewBrick::new(BrickType::Cta, "Start creating button", "Start creating")
                .with_metadata(BrickMetadata {
                    button_text: Some("Start creating".to_string()),
                    link_url: Some("/builder".to_string()),
                    description: Some("Click to start your content journey".to_string()),
                    ..Default::default()
                })
                .with_tags(["cta", "button"]),
            now,
        ),
        Brick::create(
            NewBrick::new(
                BrickType::Quote,
                "Team motto",
                "\"Content is king, but structured content is an empire.\" - The Content LEGO team",
            )
            .with_tags(["quote", "motto"]),
            now,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::now;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_type_filter() {
        assert_eq!(parse_type_filter(None).unwrap(), None);
        assert_eq!(parse_type_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_type_filter(Some(" ")).unwrap(), None);
        assert_eq!(parse_type_filter(Some("cta")).unwrap(), Some(BrickType::Cta));
        assert_matches!(parse_type_filter(Some("banner")), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_filter_by_type() {
        let out = filter_bricks(sample_bricks(now()), Some(BrickType::Quote), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].brick_type(), BrickType::Quote);
    }

    #[test]
    fn test_search_matches_content_or_tag() {
        let by_content = filter_bricks(sample_bricks(now()), None, Some("EMPIRE"));
        assert_eq!(by_content.len(), 1);

        let by_tag = filter_bricks(sample_bricks(now()), None, Some("button"));
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].brick_type(), BrickType::Cta);
    }

    #[test]
    fn test_blank_search_returns_all() {
        assert_eq!(filter_bricks(sample_bricks(now()), None, Some("  ")).len(), 3);
    }

    #[test]
    fn test_type_and_search_combine() {
        let out = filter_bricks(sample_bricks(now()), Some(BrickType::Text), Some("button"));
        assert!(out.is_empty());
    }
}
