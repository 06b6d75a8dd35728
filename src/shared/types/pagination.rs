//! Pagination window resolution.
//!
//! Query-string values are untrusted: anything that does not parse, or parses
//! to zero, falls back to the defaults. Negative values are passed through
//! unchanged, so `skip` can be negative and `total_pages` can be `-0.0`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Page used when `page` is missing, unparsable or zero.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when `limit` is missing, unparsable or zero.
pub const DEFAULT_LIMIT: i64 = 10;

/// Requested page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a window from raw `page` / `limit` query values.
    pub fn resolve(raw_page: Option<&str>, raw_limit: Option<&str>) -> Self {
        Self {
            page: parse_or_default(raw_page, DEFAULT_PAGE),
            limit: parse_or_default(raw_limit, DEFAULT_LIMIT),
        }
    }

    /// Number of records to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_items: u64) -> f64 {
        total_pages(total_items, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// `ceil(total_items / limit)` in double precision.
///
/// Zero items gives zero pages. A negative limit gives a non-positive result
/// whose sign bit is kept, e.g. `ceil(3 / -5) == -0.0`.
pub fn total_pages(total_items: u64, limit: i64) -> f64 {
    (total_items as f64 / limit as f64).ceil()
}

fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(parse_leading_int) {
        Some(0) | None => default,
        Some(value) => value,
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace is skipped, then an optional sign, then the longest run
/// of digits. `0x`/`0X` switches to hexadecimal. Trailing garbage is ignored
/// (`"2.5"` is `2`, `"12abc"` is `12`); no digits at all is `None`.
/// Out-of-range values saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen = true;
        value = value.saturating_mul(i64::from(radix)).saturating_add(i64::from(d));
    }

    if !seen {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// One page of records plus the counters reported to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub current_page: i64,
    pub total_pages: f64,
    pub total_items: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_items: u64, request: PageRequest) -> Self {
        Self {
            items,
            current_page: request.page,
            total_pages: request.total_pages(total_items),
            total_items,
        }
    }

    /// Attach the resource-specific JSON keys, e.g. `users` / `totalUsers`.
    pub fn into_body(self, collection_key: &'static str, total_key: &'static str) -> PageBody<T> {
        PageBody {
            collection_key,
            total_key,
            result: self,
        }
    }
}

/// Serializes as `{ <collection>: [...], currentPage, totalPages, <total> }`.
#[derive(Debug)]
pub struct PageBody<T> {
    collection_key: &'static str,
    total_key: &'static str,
    result: PageResult<T>,
}

impl<T> PageBody<T> {
    pub fn result(&self) -> &PageResult<T> {
        &self.result
    }
}

impl<T: Serialize> Serialize for PageBody<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(self.collection_key, &self.result.items)?;
        map.serialize_entry("currentPage", &self.result.current_page)?;
        map.serialize_entry("totalPages", &PageCount(self.result.total_pages))?;
        map.serialize_entry(self.total_key, &self.result.total_items)?;
        map.end()
    }
}

/// Whole page counts go out as JSON integers; `-0.0` becomes `0`.
struct PageCount(f64);

impl Serialize for PageCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}
