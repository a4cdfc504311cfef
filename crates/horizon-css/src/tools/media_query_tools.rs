//! Parsing stand-alone media queries and wrapping stylesheets in `@media`.

use std::sync::Arc;

use crate::decl::{CascadingStyleSheet, ImportRule, MediaQuery, MediaRule, RuleContainer};
use crate::reader::{CssReader, DoNothingParseExceptionHandler, ReaderSettings};
use crate::version::CssVersion;

/// Parse a comma separated media query list such as `screen and (color), print`.
///
/// Returns `None` for blank or malformed input.
pub fn parse_media_queries(media_queries: &str, version: CssVersion) -> Option<Vec<MediaQuery>> {
    if media_queries.trim().is_empty() {
        return None;
    }
    let settings = ReaderSettings::new(version)
        .ok()?
        .with_exception_handler(Arc::new(DoNothingParseExceptionHandler));

    let css = format!("@media {media_queries} {{}}");
    let Some(sheet) = CssReader::read_from_string(&css, &settings) else {
        tracing::debug!(media_queries, "Failed to parse media queries");
        return None;
    };
    let media = sheet.media_rules().next()?;
    Some(media.media_queries().to_vec())
}

/// Whether [`wrap_in_media_query`] can wrap `sheet`.
///
/// Without nesting, only sheets free of `@media` rules can be wrapped.
pub fn can_wrap_in_media_query(sheet: &CascadingStyleSheet, allow_nested: bool) -> bool {
    allow_nested || sheet.media_rules().next().is_none()
}

/// A copy of `sheet` with all rules moved into one `@media` rule.
///
/// Namespace rules are copied unchanged. Import rules without media
/// queries get `media_queries`; the others are copied unchanged. Returns
/// `None` if `media_queries` is empty or the sheet cannot be wrapped.
pub fn wrap_in_media_query(
    sheet: &CascadingStyleSheet,
    media_queries: &[MediaQuery],
    allow_nested: bool,
) -> Option<CascadingStyleSheet> {
    if media_queries.is_empty() || !can_wrap_in_media_query(sheet, allow_nested) {
        return None;
    }

    let mut wrapped = CascadingStyleSheet::new();
    for import in sheet.import_rules() {
        if import.has_media_queries() {
            wrapped.add_import_rule(import.clone());
        } else {
            let mut rule = ImportRule::new(import.location().clone());
            rule.media_queries_mut().extend_from_slice(media_queries);
            wrapped.add_import_rule(rule);
        }
    }
    for namespace in sheet.namespace_rules() {
        wrapped.add_namespace_rule(namespace.clone());
    }

    let mut media = MediaRule::new();
    media.media_queries_mut().extend_from_slice(media_queries);
    *media.rules_mut() = sheet.rules().to_vec();
    wrapped.add_rule(media);
    Some(wrapped)
}
