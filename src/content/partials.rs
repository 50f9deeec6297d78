// Header/footer partials: fetched as text and inserted verbatim.

use super::{Fetch, Page};
use crate::error::LoadError;

pub const HEADER_ANCHOR: &str = "tide-header-container";
pub const FOOTER_ANCHOR: &str = "coral-footer-container";

/// Fetch `path` and write it into `anchor`. `Ok(false)` when the page has no
/// such anchor.
pub async fn load_partial<F: Fetch, P: Page>(
    fetch: &F,
    page: &P,
    anchor: &str,
    path: &str,
) -> Result<bool, LoadError> {
    let html = fetch.fetch_text(path).await?;
    Ok(page.replace_content(anchor, &html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{MemoryPage, StaticFetch};
    use futures::executor::block_on;

    #[test]
    fn partial_is_inserted_verbatim() {
        let body = "<header><button id=\"burger-menu\"></button></header>";
        let fetch = StaticFetch::with("tide-header.html", body);
        let page = MemoryPage::with_anchor(HEADER_ANCHOR, "");
        assert!(block_on(load_partial(&fetch, &page, HEADER_ANCHOR, "tide-header.html")).unwrap());
        assert_eq!(page.content(HEADER_ANCHOR).unwrap(), body);
    }

    #[test]
    fn missing_anchor_reports_false() {
        let fetch = StaticFetch::with("coral-footer.html", "<footer/>");
        let page = MemoryPage::default();
        let placed = block_on(load_partial(&fetch, &page, FOOTER_ANCHOR, "coral-footer.html"));
        assert!(!placed.unwrap());
    }

    #[test]
    fn fetch_error_is_returned() {
        let page = MemoryPage::with_anchor(FOOTER_ANCHOR, "");
        let fetch = StaticFetch::default();
        let err = block_on(load_partial(&fetch, &page, FOOTER_ANCHOR, "coral-footer.html"));
        assert!(matches!(err, Err(LoadError::Transport { .. })));
        assert_eq!(page.content(FOOTER_ANCHOR).unwrap(), "");
    }
}
