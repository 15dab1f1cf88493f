//! Request signature computation.
//!
//! The router authenticates callers with an MD5-based scheme: concatenate
//! `key + value` for every parameter in lexicographic key order, wrap the
//! result in the app secret on both sides, MD5 the UTF-8 bytes, and render
//! the digest as uppercase hex. MD5 carries no security claim here; it is
//! simply the sign_method the platform mandates.

use std::collections::BTreeMap;

use md5::{Digest, Md5};

/// Compute the `sign` value for a merged parameter map.
///
/// Pure and deterministic: identical inputs always yield the same 32-char
/// uppercase hex digest. The map must not yet contain the `sign` key itself.
pub fn compute_sign(params: &BTreeMap<String, String>, secret: &str) -> String {
    let body_len: usize = params.iter().map(|(k, v)| k.len() + v.len()).sum();
    let mut sign_str = String::with_capacity(2 * secret.len() + body_len);
    sign_str.push_str(secret);
    for (key, value) in params {
        sign_str.push_str(key);
        sign_str.push_str(value);
    }
    sign_str.push_str(secret);

    hex::encode_upper(Md5::digest(sign_str.as_bytes()))
}
