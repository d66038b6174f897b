// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link classification for page transitions and active-link highlighting.

/// Whether following a link keeps the visitor on this site, so the page should
/// fade while the next one loads.
///
/// `href` is the raw attribute value; fragment-only links are handled by the
/// anchor scroller and never reach here.
#[must_use]
pub fn is_internal_navigation(link_host: &str, page_host: &str, href: Option<&str>) -> bool {
    link_host == page_host && href.is_some_and(|h| !h.is_empty() && h != "#")
}

/// Whether a navigation link points at the page currently displayed.
///
/// A trailing `index.html` and a trailing slash are treated as the same page.
#[must_use]
pub fn is_current_page(link_path: &str, current_path: &str) -> bool {
    normalize(link_path) == normalize(current_path)
}

fn normalize(path: &str) -> &str {
    let path = path.strip_suffix("index.html").unwrap_or(path);
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_host_links_fade() {
        assert!(is_internal_navigation("example.org", "example.org", Some("/about.html")));
        assert!(!is_internal_navigation("cdn.example.org", "example.org", Some("/x")));
        assert!(!is_internal_navigation("example.org", "example.org", Some("#")));
        assert!(!is_internal_navigation("example.org", "example.org", Some("")));
        assert!(!is_internal_navigation("example.org", "example.org", None));
    }

    #[test]
    fn current_page_matching() {
        assert!(is_current_page("/docs/intro.html", "/docs/intro.html"));
        assert!(is_current_page("/docs/", "/docs/index.html"));
        assert!(is_current_page("/", "/index.html"));
        assert!(!is_current_page("/docs/intro.html", "/docs/setup.html"));
        assert!(!is_current_page("/", "/docs/"));
    }
}
