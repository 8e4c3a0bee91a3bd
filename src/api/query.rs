//! URL composition: path substitution, query encoding, fail-fast validation.

use crate::api::endpoint::{check_pagination, EndpointSpec, ParamValue, RequestParams};
use crate::api::error::{KaiascanError, KaiascanResult};

/// Builds request URLs for a fixed base URL.
///
/// Output is deterministic: path parameters are substituted in declared
/// order, then query parameters are emitted in the order the endpoint
/// declares them, optional ones only when present.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    base_url: &'a str,
}

impl<'a> QueryBuilder<'a> {
    /// `base_url` is used verbatim; it should end with `/`.
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }

    /// Validate `params` against `endpoint` and compose the full URL.
    pub fn build(&self, endpoint: &EndpointSpec, params: &RequestParams) -> KaiascanResult<String> {
        reject_unknown(endpoint, params)?;

        let path = Self::path(endpoint, params)?;
        let query = Self::query_string(endpoint, params)?;

        let mut url = String::with_capacity(self.base_url.len() + path.len() + query.len() + 1);
        url.push_str(self.base_url);
        url.push_str(&path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        Ok(url)
    }

    /// Substitute each path parameter, percent-encoded on its own, into the
    /// template. Template separators are left untouched.
    pub fn path(endpoint: &EndpointSpec, params: &RequestParams) -> KaiascanResult<String> {
        let mut path = endpoint.path.to_string();
        for name in endpoint.path_params {
            let value = params
                .get(name)
                .ok_or_else(|| KaiascanError::validation(*name, "is required"))?;
            if value.is_blank() {
                return Err(KaiascanError::validation(*name, "must not be empty"));
            }
            let placeholder = format!("{{{}}}", name);
            debug_assert!(
                path.contains(&placeholder),
                "{} has no placeholder for {}",
                endpoint.name,
                name
            );
            path = path.replace(&placeholder, &encode_value(value));
        }
        Ok(path)
    }

    /// Encode the query parameters declared by `endpoint`, without the `?`.
    pub fn query_string(endpoint: &EndpointSpec, params: &RequestParams) -> KaiascanResult<String> {
        if endpoint.paginated {
            check_pagination(params)
                .map_err(|(field, reason)| KaiascanError::validation(field, reason))?;
        }

        let mut pairs = Vec::with_capacity(endpoint.query_params.len());
        for spec in endpoint.query_params {
            let value = match params.get(spec.name) {
                Some(value) if !value.is_blank() => value,
                Some(_) if spec.required => {
                    return Err(KaiascanError::validation(spec.name, "must not be empty"));
                }
                None if spec.required => {
                    return Err(KaiascanError::validation(spec.name, "is required"));
                }
                _ => continue,
            };

            if let Some(validate) = spec.validate {
                validate(value).map_err(|reason| KaiascanError::validation(spec.name, reason))?;
            }

            pairs.push(format!("{}={}", spec.name, encode_value(value)));
        }
        Ok(pairs.join("&"))
    }
}

/// Parameters the endpoint does not declare would otherwise be dropped silently.
/// With several unknown names, the alphabetically first one is reported.
fn reject_unknown(endpoint: &EndpointSpec, params: &RequestParams) -> KaiascanResult<()> {
    match params.names().filter(|name| !endpoint.accepts(name)).min() {
        Some(name) => Err(KaiascanError::validation(
            name,
            format!("not accepted by {}", endpoint.name),
        )),
        None => Ok(()),
    }
}

/// Percent-encode one value. Lists are joined first and encoded once; the
/// joining commas stay literal.
fn encode_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(s) => urlencoding::encode(s).into_owned(),
        ParamValue::Int(n) => n.to_string(),
        ParamValue::UInt(n) => n.to_string(),
        ParamValue::List(items) => urlencoding::encode(&items.join(","))
            .into_owned()
            .replace("%2C", ","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::{block_number, directions, Pagination, QueryParam};
    use crate::api::error::ErrorKind;

    const BASE: &str = "https://mainnet-oapi.kaiascan.io/";

    static LOOKUP: EndpointSpec = EndpointSpec {
        name: "lookup",
        path: "api/v1/tokens",
        path_params: &[],
        query_params: &[QueryParam::required("tokenAddress")],
        paginated: false,
    };

    static LISTING: EndpointSpec = EndpointSpec {
        name: "listing",
        path: "api/v1/accounts/{accountAddress}/transactions",
        path_params: &["accountAddress"],
        query_params: &[
            QueryParam::optional("page"),
            QueryParam::optional("size"),
            QueryParam::optional("blockNumberStart").with_validator(block_number),
            QueryParam::optional("directions").with_validator(directions),
        ],
        paginated: true,
    };

    #[test]
    fn test_required_query_param() {
        let url = QueryBuilder::new(BASE)
            .build(&LOOKUP, &RequestParams::new().with("tokenAddress", "0xABC"))
            .unwrap();
        assert_eq!(url, "https://mainnet-oapi.kaiascan.io/api/v1/tokens?tokenAddress=0xABC");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = QueryBuilder::new(BASE)
            .build(&LOOKUP, &RequestParams::new().with("tokenAddress", "a b&c=d/e"))
            .unwrap();
        assert!(url.ends_with("?tokenAddress=a%20b%26c%3Dd%2Fe"));
    }

    #[test]
    fn test_missing_or_empty_required_fails() {
        let err = QueryBuilder::new(BASE)
            .build(&LOOKUP, &RequestParams::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("tokenAddress"));

        let err = QueryBuilder::new(BASE)
            .build(&LOOKUP, &RequestParams::new().with("tokenAddress", ""))
            .unwrap_err();
        assert_eq!(err.field(), Some("tokenAddress"));
    }

    #[test]
    fn test_path_param_encoded_individually() {
        let url = QueryBuilder::new(BASE)
            .build(&LISTING, &RequestParams::new().with("accountAddress", "0x1/../x"))
            .unwrap();
        assert_eq!(
            url,
            "https://mainnet-oapi.kaiascan.io/api/v1/accounts/0x1%2F..%2Fx/transactions"
        );
    }

    #[test]
    fn test_missing_path_param_fails() {
        let err = QueryBuilder::new(BASE)
            .build(&LISTING, &RequestParams::new())
            .unwrap_err();
        assert_eq!(err.field(), Some("accountAddress"));

        let err = QueryBuilder::new(BASE)
            .build(&LISTING, &RequestParams::new().with("accountAddress", ""))
            .unwrap_err();
        assert_eq!(err.field(), Some("accountAddress"));
    }

    #[test]
    fn test_query_order_follows_declaration() {
        let params = RequestParams::new()
            .with("directions", vec!["in", "out"])
            .with("accountAddress", "0xabc")
            .with_pagination(&Pagination::new(2, 50));
        let url = QueryBuilder::new(BASE).build(&LISTING, &params).unwrap();
        assert_eq!(
            url,
            "https://mainnet-oapi.kaiascan.io/api/v1/accounts/0xabc/transactions?page=2&size=50&directions=in,out"
        );
    }

    #[test]
    fn test_optional_params_omitted_when_absent() {
        let params = RequestParams::new()
            .with("accountAddress", "0xabc")
            .with("directions", Vec::<String>::new());
        let url = QueryBuilder::new(BASE).build(&LISTING, &params).unwrap();
        assert_eq!(
            url,
            "https://mainnet-oapi.kaiascan.io/api/v1/accounts/0xabc/transactions"
        );
    }

    #[test]
    fn test_pagination_bounds() {
        for (page, size, field) in [(0, 20, "page"), (1, 0, "size"), (1, 2001, "size")] {
            let params = RequestParams::new()
                .with("accountAddress", "0xabc")
                .with_pagination(&Pagination::new(page, size));
            let err = QueryBuilder::new(BASE).build(&LISTING, &params).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_validator_runs() {
        let params = RequestParams::new()
            .with("accountAddress", "0xabc")
            .with("directions", vec!["up"]);
        let err = QueryBuilder::new(BASE).build(&LISTING, &params).unwrap_err();
        assert_eq!(err.field(), Some("directions"));

        let params = RequestParams::new()
            .with("accountAddress", "0xabc")
            .with("blockNumberStart", -5i64);
        let err = QueryBuilder::new(BASE).build(&LISTING, &params).unwrap_err();
        assert_eq!(err.field(), Some("blockNumberStart"));
    }

    #[test]
    fn test_unknown_param_rejected() {
        let params = RequestParams::new()
            .with("tokenAddress", "0xabc")
            .with("tokenid", "1");
        let err = QueryBuilder::new(BASE).build(&LOOKUP, &params).unwrap_err();
        assert_eq!(err.field(), Some("tokenid"));
    }

    #[test]
    fn test_unknown_param_report_is_stable() {
        let params = RequestParams::new()
            .with("tokenAddress", "0xabc")
            .with("zeta", "1")
            .with("mu", "2")
            .with("alpha", "3");
        for _ in 0..20 {
            let err = QueryBuilder::new(BASE).build(&LOOKUP, &params).unwrap_err();
            assert_eq!(err.field(), Some("alpha"));
        }
    }

    #[test]
    fn test_whitespace_only_values_are_missing() {
        let err = QueryBuilder::new(BASE)
            .build(&LISTING, &RequestParams::new().with("accountAddress", "   "))
            .unwrap_err();
        assert_eq!(err.field(), Some("accountAddress"));

        let err = QueryBuilder::new(BASE)
            .build(&LOOKUP, &RequestParams::new().with("tokenAddress", " \t "))
            .unwrap_err();
        assert_eq!(err.field(), Some("tokenAddress"));
    }

    #[test]
    fn test_large_block_number_path() {
        static BY_BLOCK: EndpointSpec = EndpointSpec {
            name: "by_block",
            path: "api/v1/blocks/{blockNumber}/rewards",
            path_params: &["blockNumber"],
            query_params: &[],
            paginated: false,
        };
        let url = QueryBuilder::new(BASE)
            .build(&BY_BLOCK, &RequestParams::new().with("blockNumber", u64::MAX))
            .unwrap();
        assert_eq!(
            url,
            "https://mainnet-oapi.kaiascan.io/api/v1/blocks/18446744073709551615/rewards"
        );
    }

    #[test]
    fn test_deterministic() {
        let params = RequestParams::new()
            .with("accountAddress", "0xabc")
            .with("blockNumberStart", 10u64)
            .with_pagination(&Pagination::new(3, 100));
        let builder = QueryBuilder::new(BASE);
        let first = builder.build(&LISTING, &params).unwrap();
        let second = builder.build(&LISTING, &params.clone()).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with("?page=3&size=100&blockNumberStart=10"));
    }
}
