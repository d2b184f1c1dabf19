/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::http::{BitbitxError, Result};

/// returnCode value for a successful call
pub const CODE_OK: &str = "0";

/// The decrypted response envelope every service call returns.
///
/// Single-row calls carry an object in `returnParams`; listing calls
/// carry the paginated shape (see [`Paginated`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "returnCode")]
    pub return_code: String,
    #[serde(rename = "returnMsg", default)]
    pub return_msg: String,
    #[serde(rename = "returnParams", default)]
    pub return_params: serde_json::Value,
}

impl ApiResponse {
    /// Whether the call succeeded
    pub fn is_ok(&self) -> bool {
        self.return_code == CODE_OK
    }

    /// Extract `returnParams`, turning a non-zero returnCode into an
    /// API error carrying `returnMsg`.
    pub fn into_params(self) -> Result<serde_json::Value> {
        if self.is_ok() {
            Ok(self.return_params)
        } else {
            Err(BitbitxError::api_error(self.return_code, self.return_msg))
        }
    }
}

/// Multi-row `returnParams` shape: `rows` holds the data, `records` the
/// total row count, `total` the page count, `page` the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub rows: Vec<T>,
    pub page: i64,
    pub records: i64,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_params_success() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"returnCode":"0","returnMsg":"","returnParams":{"f01":123456,"token":"abc.def"}}"#,
        )
        .unwrap();

        assert!(response.is_ok());
        let params = response.into_params().unwrap();
        assert_eq!(params["token"], "abc.def");
    }

    #[test]
    fn test_into_params_failure_carries_message() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"returnCode":"1","returnMsg":"bad credentials","returnParams":{}}"#,
        )
        .unwrap();

        assert!(!response.is_ok());
        match response.into_params() {
            Err(BitbitxError::Api { code, message }) => {
                assert_eq!(code, "1");
                assert_eq!(message, "bad credentials");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_params_default_to_null() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"returnCode":"0"}"#).unwrap();
        assert!(response.return_msg.is_empty());
        assert!(response.return_params.is_null());
    }

    #[test]
    fn test_paginated_rows() {
        let paginated: Paginated<serde_json::Value> = serde_json::from_str(
            r#"{"rows":[{"id":1},{"id":2}],"page":1,"records":8,"total":1}"#,
        )
        .unwrap();

        assert_eq!(paginated.rows.len(), 2);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.records, 8);
        assert_eq!(paginated.total, 1);
    }
}
