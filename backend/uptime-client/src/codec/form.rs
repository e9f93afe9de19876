use common::RedactedApiKey;
use models::wire::{self, LIST_SEPARATOR};
use models::{DateRange, PageParams};

use std::fmt;

use url::form_urlencoded::Serializer;

pub const API_KEY_PARAM: &str = "api_key";
pub const FORMAT_PARAM: &str = "format";
pub const FORMAT_JSON: &str = "json";

/// Form-encoded request body.
///
/// The credential and `format=json` always come first. Helpers encode the
/// API's conventions so each request type only names its fields.
pub struct FormBody {
    serializer: Serializer<'static, String>,
}

impl FormBody {
    pub fn new(api_key: &RedactedApiKey) -> Self {
        let mut serializer = Serializer::new(String::new());
        serializer.append_pair(API_KEY_PARAM, api_key.expose());
        serializer.append_pair(FORMAT_PARAM, FORMAT_JSON);
        Self { serializer }
    }

    pub fn pair(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.serializer.append_pair(name, &value.to_string());
        self
    }

    pub fn opt<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.pair(name, value);
        }
        self
    }

    /// Free text, omitted when absent.
    pub fn text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.serializer.append_pair(name, value);
        }
        self
    }

    /// `1-2-3`; nothing at all for an empty list.
    pub fn list<T: fmt::Display>(&mut self, name: &str, items: &[T]) -> &mut Self {
        if !items.is_empty() {
            self.serializer.append_pair(name, &wire::hyphen_join(items));
        }
        self
    }

    /// Include flags are `name=1` or absent.
    pub fn flag(&mut self, name: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.serializer.append_pair(name, "1");
        }
        self
    }

    /// Explicit boolean settings: `1` or `0`, absent when unset.
    pub fn switch(&mut self, name: &str, value: Option<bool>) -> &mut Self {
        self.opt(name, value.map(u8::from))
    }

    /// `start_end` pairs joined by `-`.
    pub fn date_ranges(&mut self, name: &str, ranges: &[DateRange]) -> &mut Self {
        if !ranges.is_empty() {
            let joined = ranges
                .iter()
                .map(DateRange::wire_value)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR);
            self.serializer.append_pair(name, &joined);
        }
        self
    }

    pub fn page(&mut self, page: &PageParams) -> &mut Self {
        if !page.is_default_offset() {
            self.pair("offset", page.offset);
        }
        if !page.is_default_limit() {
            self.pair("limit", page.limit);
        }
        self
    }

    pub fn finish(mut self) -> String {
        self.serializer.finish()
    }
}

impl fmt::Debug for FormBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBody").finish_non_exhaustive()
    }
}
