//! Static endpoint metadata and per-call request parameters.
//!
//! An [`EndpointSpec`] describes one logical operation: its path template,
//! the path parameters substituted into it, and the query parameters it
//! accepts. Specs are `static` values shared by every call; the per-call
//! [`RequestParams`] are built fresh and dropped once the URL is composed.

use std::collections::HashMap;
use std::fmt;

/// Smallest accepted `page`.
pub const MIN_PAGE: u64 = 1;

/// Accepted `size` range for paginated endpoints.
pub const MIN_PAGE_SIZE: u64 = 1;
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Extra check run on a query parameter value. Returns the failure reason.
pub type Validator = fn(&ParamValue) -> Result<(), String>;

/// Declaration of one query parameter.
#[derive(Debug, Clone, Copy)]
pub struct QueryParam {
    pub name: &'static str,
    pub required: bool,
    pub validate: Option<Validator>,
}

impl QueryParam {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            validate: None,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            validate: None,
        }
    }

    pub const fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// Description of one logical API operation.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSpec {
    /// Operation name, used in logs.
    pub name: &'static str,
    /// Path relative to the base URL, with `{param}` placeholders.
    pub path: &'static str,
    /// Placeholders in `path`, substituted in this order.
    pub path_params: &'static [&'static str],
    /// Query parameters in emission order.
    pub query_params: &'static [QueryParam],
    /// Whether `page`/`size` bounds are enforced.
    pub paginated: bool,
}

impl EndpointSpec {
    pub fn query_param(&self, name: &str) -> Option<&QueryParam> {
        self.query_params.iter().find(|p| p.name == name)
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.path_params.contains(&name) || self.query_param(name).is_some()
    }
}

// ============================================================================
// Parameter values
// ============================================================================

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    /// Unsigned values that may not fit in `i64` (block numbers).
    UInt(u64),
    /// Sent comma-joined.
    List(Vec<String>),
}

impl ParamValue {
    /// True for whitespace-only strings and for lists with no non-blank entry.
    pub fn is_blank(&self) -> bool {
        match self {
            ParamValue::Str(s) => s.trim().is_empty(),
            ParamValue::Int(_) | ParamValue::UInt(_) => false,
            ParamValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Numeric value, widened so signed and unsigned compare without loss.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            ParamValue::Int(n) => Some(i128::from(*n)),
            ParamValue::UInt(n) => Some(i128::from(*n)),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::UInt(n) => write!(f, "{}", n),
            ParamValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

macro_rules! impl_int_param {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_int_param!(Int: i32, i64, u32);
impl_int_param!(UInt: u64);

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

// ============================================================================
// RequestParams
// ============================================================================

/// Named parameter values for one call (path and query alike).
///
/// Absent values are simply not inserted; [`RequestParams::with_opt`] skips
/// `None` so optional filters can be passed straight through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    values: HashMap<String, ParamValue>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn with_pagination(self, pagination: &Pagination) -> Self {
        self.with_opt("page", pagination.page)
            .with_opt("size", pagination.size)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// `page`/`size` pair for list endpoints. `None` leaves the server default
/// (page 1, size 20).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Check `page`/`size` bounds when present.
pub fn check_pagination(params: &RequestParams) -> Result<(), (&'static str, String)> {
    if let Some(value) = params.get("page") {
        match value.as_int() {
            Some(page) if page >= i128::from(MIN_PAGE) => {}
            _ => return Err(("page", format!("must be >= {}, got {}", MIN_PAGE, value))),
        }
    }
    if let Some(value) = params.get("size") {
        match value.as_int() {
            Some(size) if (i128::from(MIN_PAGE_SIZE)..=i128::from(MAX_PAGE_SIZE)).contains(&size) => {}
            _ => {
                return Err((
                    "size",
                    format!(
                        "must be between {} and {}, got {}",
                        MIN_PAGE_SIZE, MAX_PAGE_SIZE, value
                    ),
                ))
            }
        }
    }
    Ok(())
}

// ============================================================================
// Validators
// ============================================================================

/// Rejects empty strings and empty lists, and lists containing empty items.
pub fn non_empty(value: &ParamValue) -> Result<(), String> {
    match value {
        ParamValue::List(items) if items.is_empty() => Err("must not be empty".to_string()),
        ParamValue::List(items) if items.iter().any(|s| s.trim().is_empty()) => {
            Err("must not contain empty entries".to_string())
        }
        ParamValue::Str(s) if s.trim().is_empty() => Err("must not be empty".to_string()),
        _ => Ok(()),
    }
}

/// Block numbers are non-negative integers.
pub fn block_number(value: &ParamValue) -> Result<(), String> {
    match value {
        ParamValue::UInt(_) => Ok(()),
        ParamValue::Int(n) if *n >= 0 => Ok(()),
        ParamValue::Int(n) => Err(format!("must be >= 0, got {}", n)),
        other => Err(format!("must be an integer, got {}", other)),
    }
}

/// Transfer directions accepted by account transaction filters.
pub fn directions(value: &ParamValue) -> Result<(), String> {
    let items = match value {
        ParamValue::List(items) => items.as_slice(),
        other => return Err(format!("must be a list, got {}", other)),
    };
    match items.iter().find(|d| !matches!(d.as_str(), "in" | "out" | "self")) {
        Some(bad) => Err(format!("unknown direction `{}`", bad)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_params_with_opt_skips_none() {
        let params = RequestParams::new()
            .with("tokenAddress", "0xabc")
            .with_opt("keyword", None::<String>)
            .with_opt("page", Some(2u32));

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("page"), Some(&ParamValue::Int(2)));
        assert!(params.get("keyword").is_none());
    }

    #[test]
    fn test_pagination_into_params() {
        let params = RequestParams::new().with_pagination(&Pagination::default().with_size(50));
        assert!(params.get("page").is_none());
        assert_eq!(params.get("size"), Some(&ParamValue::Int(50)));
    }

    #[test]
    fn test_check_pagination_bounds() {
        assert!(check_pagination(&RequestParams::new()).is_ok());
        assert!(check_pagination(&RequestParams::new().with_pagination(&Pagination::new(1, 1))).is_ok());
        assert!(check_pagination(&RequestParams::new().with_pagination(&Pagination::new(7, 2000))).is_ok());

        let (field, reason) =
            check_pagination(&RequestParams::new().with("page", 0u32)).unwrap_err();
        assert_eq!(field, "page");
        assert_eq!(reason, "must be >= 1, got 0");

        let (field, reason) =
            check_pagination(&RequestParams::new().with("size", 2001u32)).unwrap_err();
        assert_eq!(field, "size");
        assert_eq!(reason, "must be between 1 and 2000, got 2001");

        let (field, _) = check_pagination(&RequestParams::new().with("size", 0u32)).unwrap_err();
        assert_eq!(field, "size");

        let (field, _) = check_pagination(&RequestParams::new().with("page", "two")).unwrap_err();
        assert_eq!(field, "page");
    }

    #[test]
    fn test_large_unsigned_values_are_lossless() {
        let value = ParamValue::from(u64::MAX);
        assert_eq!(value, ParamValue::UInt(u64::MAX));
        assert_eq!(value.to_string(), "18446744073709551615");
        assert_eq!(value.as_int(), Some(i128::from(u64::MAX)));
        assert!(block_number(&value).is_ok());

        assert_eq!(ParamValue::from(7u32), ParamValue::Int(7));

        let (field, reason) =
            check_pagination(&RequestParams::new().with("size", u64::MAX)).unwrap_err();
        assert_eq!(field, "size");
        assert_eq!(reason, "must be between 1 and 2000, got 18446744073709551615");
    }

    #[test]
    fn test_is_blank() {
        assert!(ParamValue::from("").is_blank());
        assert!(ParamValue::from("  \t").is_blank());
        assert!(!ParamValue::from(" 0x1 ").is_blank());
        assert!(ParamValue::List(vec![]).is_blank());
        assert!(ParamValue::from(vec![" ", ""]).is_blank());
        assert!(!ParamValue::from(vec![" ", "0x1"]).is_blank());
        assert!(!ParamValue::Int(0).is_blank());
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::from("x").to_string(), "x");
        assert_eq!(ParamValue::from(42i64).to_string(), "42");
        assert_eq!(ParamValue::from(vec!["in", "out"]).to_string(), "in,out");
    }

    #[test]
    fn test_validators() {
        assert!(non_empty(&ParamValue::from(vec!["0x1"])).is_ok());
        assert!(non_empty(&ParamValue::List(vec![])).is_err());
        assert!(non_empty(&ParamValue::from(vec!["0x1", " "])).is_err());
        assert!(non_empty(&ParamValue::from("  ")).is_err());

        assert!(block_number(&ParamValue::Int(0)).is_ok());
        assert!(block_number(&ParamValue::Int(-1)).is_err());
        assert!(block_number(&ParamValue::from("12")).is_err());

        assert!(directions(&ParamValue::from(vec!["in", "out"])).is_ok());
        assert!(directions(&ParamValue::from(vec!["sideways"])).is_err());
    }

    #[test]
    fn test_endpoint_accepts() {
        static SPEC: EndpointSpec = EndpointSpec {
            name: "example",
            path: "api/v1/things/{id}",
            path_params: &["id"],
            query_params: &[QueryParam::optional("page"), QueryParam::required("kind")],
            paginated: true,
        };
        assert!(SPEC.accepts("id"));
        assert!(SPEC.accepts("kind"));
        assert!(!SPEC.accepts("other"));
        assert!(SPEC.query_param("kind").unwrap().required);
    }
}
