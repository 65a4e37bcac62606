//! Pagination over the gateway's list endpoints.
//!
//! List queries take a `PageRequest` as `pagination.*` query parameters and
//! return a `PageResponse` whose `next_key` continues the listing. An empty
//! `next_key` ends it.

use std::collections::HashSet;

use base64::Engine;

use crate::proto::{PageRequest, PageResponse};
use crate::{ArkeoError, Result};

/// Query parameters for a page request.
///
/// Fields left at their zero value are omitted, so the gateway applies its own
/// defaults for them.
pub fn query_params(page: &PageRequest) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !page.key.is_empty() {
        params.push((
            "pagination.key",
            base64::engine::general_purpose::STANDARD.encode(&page.key),
        ));
    }
    if page.offset != 0 {
        params.push(("pagination.offset", page.offset.to_string()));
    }
    if page.limit != 0 {
        params.push(("pagination.limit", page.limit.to_string()));
    }
    if page.count_total {
        params.push(("pagination.count_total", "true".to_string()));
    }
    if page.reverse {
        params.push(("pagination.reverse", "true".to_string()));
    }
    params
}

/// Cursor that walks a paginated listing one page at a time.
///
/// Every continuation key is remembered; a server that hands back a key it
/// already gave is reported as [`ArkeoError::Protocol`] instead of looping.
#[derive(Debug)]
pub struct PageWalker {
    limit: u64,
    max_pages: usize,
    next_key: Option<Vec<u8>>,
    seen: HashSet<Vec<u8>>,
    pages: usize,
}

impl PageWalker {
    pub fn new(limit: u64, max_pages: usize) -> Self {
        Self {
            limit,
            max_pages,
            next_key: Some(Vec::new()),
            seen: HashSet::new(),
            pages: 0,
        }
    }

    /// Request for the next page, or `None` once the listing is exhausted.
    pub fn next_request(&self) -> Option<PageRequest> {
        self.next_key
            .as_ref()
            .map(|key| PageRequest::after(key.clone(), self.limit))
    }

    /// Number of pages consumed so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Records a received page and positions the cursor after it.
    pub fn advance(&mut self, response: Option<&PageResponse>) -> Result<()> {
        self.pages += 1;

        let next = match response {
            Some(page) if page.has_next() => page.next_key.clone(),
            _ => {
                self.next_key = None;
                return Ok(());
            }
        };

        if !self.seen.insert(next.clone()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(pages = self.pages, "pagination key repeated");
            self.next_key = None;
            return Err(ArkeoError::Protocol(format!(
                "pagination key {} repeated after {} pages",
                hex::encode(&next),
                self.pages
            )));
        }

        if self.pages >= self.max_pages {
            self.next_key = None;
            return Err(ArkeoError::Protocol(format!(
                "listing did not end within {} pages",
                self.max_pages
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(pages = self.pages, "following pagination key");
        self.next_key = Some(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next_key: &[u8]) -> PageResponse {
        PageResponse {
            next_key: next_key.to_vec(),
            total: 0,
        }
    }

    #[test]
    fn test_query_params_skip_defaults() {
        assert!(query_params(&PageRequest::default()).is_empty());

        let request = PageRequest {
            key: vec![0xff, 0x00],
            limit: 50,
            count_total: true,
            ..Default::default()
        };
        let params = query_params(&request);
        assert_eq!(
            params,
            vec![
                ("pagination.key", "/wA=".to_string()),
                ("pagination.limit", "50".to_string()),
                ("pagination.count_total", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_walk_until_empty_key() {
        let mut walker = PageWalker::new(10, 100);

        let first = walker.next_request().unwrap();
        assert!(first.key.is_empty());
        assert_eq!(first.limit, 10);

        walker.advance(Some(&page(b"k1"))).unwrap();
        assert_eq!(walker.next_request().unwrap().key, b"k1".to_vec());

        walker.advance(Some(&page(b""))).unwrap();
        assert!(walker.next_request().is_none());
        assert_eq!(walker.pages(), 2);
    }

    #[test]
    fn test_missing_pagination_ends_walk() {
        let mut walker = PageWalker::new(10, 100);
        walker.advance(None).unwrap();
        assert!(walker.next_request().is_none());
    }

    #[test]
    fn test_repeated_key_is_protocol_error() {
        let mut walker = PageWalker::new(10, 100);
        walker.advance(Some(&page(b"k1"))).unwrap();
        walker.advance(Some(&page(b"k2"))).unwrap();

        let err = walker.advance(Some(&page(b"k1"))).unwrap_err();
        assert!(matches!(err, ArkeoError::Protocol(_)));
        assert!(walker.next_request().is_none());
    }

    #[test]
    fn test_page_cap() {
        let mut walker = PageWalker::new(1, 2);
        walker.advance(Some(&page(b"a"))).unwrap();
        assert!(walker.advance(Some(&page(b"b"))).is_err());
    }
}
