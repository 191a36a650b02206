//! Remote list state shared by the feature pages.
//!
//! DESIGN
//! ======
//! Every feature page shows one server-owned collection with the same
//! loading/error lifecycle, so the lifecycle lives here once and pages only
//! decide what to fetch and how to render a row.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::api::ApiResult;

/// A server-owned collection plus its fetch status.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> Listing<T> {
    /// Mark a fetch as in flight. Existing rows stay visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle a fetch. A failure clears the rows and records the message.
    pub fn finish(&mut self, result: ApiResult<Vec<T>>) {
        self.loading = false;
        match result {
            ApiResult::Success(items) => {
                self.items = items;
                self.error = None;
            }
            ApiResult::Failure(failure) => {
                log::warn!("list fetch failed: {failure}");
                self.items.clear();
                self.error = Some(failure.to_string());
            }
        }
    }

    /// Drop rows matching `gone` after a confirmed delete.
    pub fn remove_where<F: Fn(&T) -> bool>(&mut self, gone: F) {
        self.items.retain(|item| !gone(item));
    }

    /// Replace the first row matching `same` or append `item`.
    pub fn upsert<F: Fn(&T) -> bool>(&mut self, item: T, same: F) {
        match self.items.iter_mut().find(|existing| same(existing)) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
