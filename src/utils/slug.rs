//! Slug generation for listing URLs.
//!
//! Slugs are derived from the listing title: lowercased, with runs of
//! non-alphanumeric characters collapsed to single hyphens. On collision the
//! service layer appends a short random suffix.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Maximum length of the base slug before any collision suffix.
const MAX_SLUG_LENGTH: usize = 60;

/// Length of the random suffix appended on slug collision.
const SUFFIX_LENGTH: usize = 6;

/// Derives a URL-safe slug from a listing title.
///
/// Non-ASCII-alphanumeric runs become single hyphens; leading and trailing
/// hyphens are trimmed and the result is truncated to a bounded length.
/// Titles with no usable characters fall back to `"listing"`.
///
/// # Examples
///
/// ```
/// use travel_listings::utils::slug::slugify;
///
/// assert_eq!(slugify("Cozy Cabin in the Alps!"), "cozy-cabin-in-the-alps");
/// assert_eq!(slugify("  --  "), "listing");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        return "listing".to_string();
    }

    slug
}

/// Appends a random lowercase alphanumeric suffix to a base slug.
///
/// Used by the service layer when the base slug is already taken.
pub fn with_random_suffix(base: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();

    format!("{base}-{suffix}")
}
