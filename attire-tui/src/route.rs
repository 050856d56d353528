// File: attire-tui/src/route.rs
//
// The navigable surface, mirroring the page layout of the web version:
//   /            home
//   /try-on      virtual try-on (optional ?item= preselect)
//   /size-guide  size converter and charts
//   /shop        catalog (optional ?region= filter seed)
//   /shop/:id    product detail
//   /community   fashion feed
//   /profile/:id profile ("me" for the signed-in user)
// Anything else falls through to NotFound.

use std::fmt;
use std::str::FromStr;

use attire_common::models::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    TryOn { item: Option<String> },
    SizeGuide,
    Shop { region: Option<Region> },
    Product { product_id: String },
    Community,
    Profile { user_id: String },
    NotFound(String),
}

impl Route {
    /// Parses a path-with-optional-query string. Unknown paths become
    /// `NotFound` rather than an error, matching the catch-all route.
    pub fn parse(input: &str) -> Route {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (input, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["try-on"] => Route::TryOn {
                item: query_param(query, "item"),
            },
            ["size-guide"] => Route::SizeGuide,
            ["shop"] => Route::Shop {
                region: query_param(query, "region")
                    .and_then(|r| Region::from_str(&r).ok()),
            },
            ["shop", product_id] => Route::Product {
                product_id: (*product_id).to_string(),
            },
            ["community"] => Route::Community,
            ["profile", user_id] => Route::Profile {
                user_id: (*user_id).to_string(),
            },
            _ => Route::NotFound(input.to_string()),
        }
    }

    /// Canonical path, shown in the prompt.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::TryOn { .. } => "/try-on".to_string(),
            Route::SizeGuide => "/size-guide".to_string(),
            Route::Shop { .. } => "/shop".to_string(),
            Route::Product { product_id } => format!("/shop/{}", product_id),
            Route::Community => "/community".to_string(),
            Route::Profile { user_id } => format!("/profile/{}", user_id),
            Route::NotFound(_) => "/not-found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Pulls one value out of a query string, decoding the `+` and `%20` space
/// escapes region names arrive with.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    for pair in query?.split('&') {
        if let Some((k, v)) = pair.split_once('=') {
            if k == key && !v.is_empty() {
                return Some(v.replace('+', " ").replace("%20", " "));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/size-guide"), Route::SizeGuide);
        assert_eq!(Route::parse("/community"), Route::Community);
        assert_eq!(Route::parse("/try-on"), Route::TryOn { item: None });
        assert_eq!(Route::parse("/shop"), Route::Shop { region: None });
        assert_eq!(
            Route::parse("/shop/4"),
            Route::Product { product_id: "4".to_string() }
        );
        assert_eq!(
            Route::parse("/profile/me"),
            Route::Profile { user_id: "me".to_string() }
        );
    }

    #[test]
    fn shop_region_query_seeds_the_filter() {
        assert_eq!(
            Route::parse("/shop?region=East+Asia"),
            Route::Shop { region: Some(Region::EastAsia) }
        );
        assert_eq!(
            Route::parse("/shop?region=South%20Asia"),
            Route::Shop { region: Some(Region::SouthAsia) }
        );
        // an unknown region is ignored rather than an error
        assert_eq!(
            Route::parse("/shop?region=Atlantis"),
            Route::Shop { region: None }
        );
    }

    #[test]
    fn try_on_item_query_is_carried() {
        assert_eq!(
            Route::parse("/try-on?item=3"),
            Route::TryOn { item: Some("3".to_string()) }
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!(Route::parse("/checkout"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/shop/1/reviews"), Route::NotFound(_)));
    }

    #[test]
    fn paths_round_trip() {
        for path in ["/", "/try-on", "/size-guide", "/shop", "/shop/2", "/community", "/profile/me"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }
}
