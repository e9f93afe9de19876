use crate::wire;

use serde::{Deserialize, Serialize};

/// Server-side default and maximum page size.
pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_OFFSET: u32 = 0;

/// Paging parameters shared by every list request.
///
/// Values equal to the defaults are left off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub offset: u32,
    pub limit: u32,
}

impl PageParams {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn is_default_offset(&self) -> bool {
        self.offset == DEFAULT_OFFSET
    }

    pub fn is_default_limit(&self) -> bool {
        self.limit == DEFAULT_LIMIT
    }

    /// Parameters for the page after one described by `pagination`, if any.
    pub fn next_after(pagination: &Pagination) -> Option<Self> {
        let offset = pagination.offset.unwrap_or(DEFAULT_OFFSET);
        let limit = pagination.limit.unwrap_or(DEFAULT_LIMIT);
        let total = pagination.total?;
        let next = offset.checked_add(limit)?;
        (limit > 0 && next < total).then_some(Self::new(next, limit))
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination envelope of a list response.
///
/// `total` is the server's count; `offset` and `limit` describe the returned
/// window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(rename = "offset", default, deserialize_with = "wire::opt_u32")]
    pub offset: Option<u32>,
    #[serde(rename = "limit", default, deserialize_with = "wire::opt_u32")]
    pub limit: Option<u32>,
    #[serde(rename = "total", default, deserialize_with = "wire::opt_u32")]
    pub total: Option<u32>,
}
