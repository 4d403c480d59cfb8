use serde::Deserialize;

use crate::{OmadaError, OmadaResult};

/// Error code the controller uses on `loginStatus` (and other endpoints)
/// to signal that the session is not logged in.
pub const ERROR_CODE_NOT_LOGGED_IN: i64 = -1200;

/// Standard API response envelope from the Omada controller.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Result code. 0 indicates success.
    #[serde(rename = "errorCode", default)]
    pub error_code: i64,

    /// Error message, if any.
    #[serde(default)]
    pub msg: Option<String>,

    /// The actual data returned, if any.
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, mapping controller error codes to errors.
    pub fn into_result(self) -> OmadaResult<T> {
        if self.error_code == ERROR_CODE_NOT_LOGGED_IN {
            return Err(OmadaError::NotAuthenticated);
        }
        if self.error_code != 0 {
            return Err(OmadaError::Protocol {
                code: self.error_code,
                msg: self.msg.unwrap_or_else(|| "unknown API error".into()),
            });
        }
        self.result.ok_or(OmadaError::Protocol {
            code: 0,
            msg: "response carried no result".into(),
        })
    }
}
