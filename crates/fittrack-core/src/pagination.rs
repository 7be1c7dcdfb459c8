// ABOUTME: Page-number pagination for activity listings
// ABOUTME: Provides the client-side cursor, listing filters, and the listing page payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{defaults, fields};
use crate::models::Activity;

/// Client-side pagination position
///
/// Both fields are non-zero by construction, so the page can never drop
/// below 1 and the page size can never be 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    page: NonZeroU32,
    per_page: NonZeroU32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: NonZeroU32::MIN,
            per_page: NonZeroU32::new(defaults::PER_PAGE).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl PageCursor {
    /// Cursor on the first page with the given page size
    #[must_use]
    pub const fn with_per_page(per_page: NonZeroU32) -> Self {
        Self {
            page: NonZeroU32::MIN,
            per_page,
        }
    }

    /// Current page, starting at 1
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page.get()
    }

    /// Items per page
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page.get()
    }

    /// Move forward one page
    pub fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Move back one page
    ///
    /// Returns `false` and leaves the cursor untouched when already on page 1.
    pub fn retreat(&mut self) -> bool {
        match NonZeroU32::new(self.page.get() - 1) {
            Some(previous) => {
                self.page = previous;
                true
            }
            None => false,
        }
    }

    /// Change the page size
    pub fn set_per_page(&mut self, per_page: NonZeroU32) {
        self.per_page = per_page;
    }

    /// Back to the first page, keeping the page size
    pub fn reset(&mut self) {
        self.page = NonZeroU32::MIN;
    }
}

/// Optional listing filters
///
/// Filters share keys with [`PageCursor`]; values set here take precedence
/// over the cursor for a single call without changing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFilters {
    /// Activity type wire value (`corrida`, `yoga`, ...)
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Page number
    #[serde(rename = "pagina", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(rename = "por_pagina", default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ActivityFilters {
    /// Filter on an activity type
    #[must_use]
    pub fn with_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = Some(activity_type.into());
        self
    }

    /// Request a specific page
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Request a specific page size
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Fill unset page fields from the cursor
    #[must_use]
    pub fn merged_over(&self, cursor: &PageCursor) -> Self {
        Self {
            activity_type: self.activity_type.clone(),
            page: self.page.or(Some(cursor.page())),
            per_page: self.per_page.or(Some(cursor.per_page())),
        }
    }

    /// Query parameters in wire order (`tipo`, `pagina`, `por_pagina`)
    ///
    /// Empty types and zero values count as absent.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(activity_type) = self.activity_type.as_deref().filter(|t| !t.is_empty()) {
            pairs.push((fields::ACTIVITY_TYPE, activity_type.to_owned()));
        }
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push((fields::PAGE, page.to_string()));
        }
        if let Some(per_page) = self.per_page.filter(|p| *p > 0) {
            pairs.push((fields::PER_PAGE, per_page.to_string()));
        }
        pairs
    }
}

/// One page of the activity listing as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityPage {
    /// Activities on this page
    #[serde(rename = "atividades", default)]
    pub activities: Vec<Activity>,
    /// Total number of matching activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Page number the server answered with
    #[serde(rename = "pagina", default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size the server answered with
    #[serde(rename = "por_pagina", default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Total number of pages
    #[serde(rename = "total_paginas", default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityPage {
    /// Whether the server reports pages after this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!((self.page, self.total_pages), (Some(page), Some(total)) if page < total)
    }
}
