//! System and business parameter construction for router requests.
//!
//! Every call to the JD Union router carries six protocol-mandated system
//! fields plus the caller's payload JSON-encoded under a single fixed key.
//! Parameter maps are `BTreeMap`s so iteration order is already the
//! lexicographic key order the signing scheme requires.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

/// Query key carrying the JSON-encoded business payload.
pub const PARAM_JSON_KEY: &str = "360buy_param_json";

/// Timestamp format mandated by the router: local time, `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FORMAT: &str = "json";
const VERSION: &str = "1.0";
const SIGN_METHOD: &str = "md5";

/// Build the system parameters for an API call.
///
/// `timestamp` is passed in pre-formatted (see [`TIMESTAMP_FORMAT`]) so the
/// clock stays under the caller's control.
pub fn system_params(method: &str, app_key: &str, timestamp: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("method".to_string(), method.to_string()),
        ("app_key".to_string(), app_key.to_string()),
        ("timestamp".to_string(), timestamp.to_string()),
        ("format".to_string(), FORMAT.to_string()),
        ("v".to_string(), VERSION.to_string()),
        ("sign_method".to_string(), SIGN_METHOD.to_string()),
    ])
}

/// Wrap the business payload as the single `360buy_param_json` parameter.
///
/// serde_json writes non-ASCII characters as literal UTF-8, which is what the
/// router expects (no `\uXXXX` escaping).
pub fn business_params<T: Serialize>(params: &T) -> Result<BTreeMap<String, String>> {
    let json = serde_json::to_string(params).context("failed to encode business parameters")?;
    Ok(BTreeMap::from([(PARAM_JSON_KEY.to_string(), json)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_params_fixed_fields() {
        let params = system_params("jd.union.open.goods.query", "my_key", "2024-01-15 10:30:00");
        assert_eq!(params.len(), 6);
        assert_eq!(params["method"], "jd.union.open.goods.query");
        assert_eq!(params["app_key"], "my_key");
        assert_eq!(params["timestamp"], "2024-01-15 10:30:00");
        assert_eq!(params["format"], "json");
        assert_eq!(params["v"], "1.0");
        assert_eq!(params["sign_method"], "md5");
    }

    #[test]
    fn test_timestamp_format_renders() {
        use chrono::TimeZone;
        let dt = chrono::Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(dt.format(TIMESTAMP_FORMAT).to_string(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_business_params_wraps_payload() {
        let payload = serde_json::json!({"k": "v"});
        let params = business_params(&payload).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[PARAM_JSON_KEY], r#"{"k":"v"}"#);
    }

    #[test]
    fn test_business_params_non_ascii_literal() {
        let payload = serde_json::json!({"keyword": "鞋"});
        let params = business_params(&payload).unwrap();
        let json = &params[PARAM_JSON_KEY];
        assert!(json.contains('鞋'), "non-ASCII should stay literal: {}", json);
        assert!(!json.contains("\\u"), "should not escape to \\uXXXX: {}", json);
    }

    #[test]
    fn test_business_params_serialization_failure() {
        struct Unserializable;

        impl serde::Serialize for Unserializable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("not representable"))
            }
        }

        let err = business_params(&Unserializable).unwrap_err();
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }
}
