//! # Horizon Errors
//!
//! Horizon reports failures as RFC 7807 problem documents:
//!
//! ```json
//! {
//!   "type": "https://stellar.org/horizon-errors/transaction_failed",
//!   "title": "Transaction Failed",
//!   "status": 400,
//!   "detail": "The transaction failed when submitted to the network...",
//!   "extras": { "result_codes": { "transaction": "tx_failed", "operations": ["op_underfunded"] } }
//! }
//! ```
//!
//! [`error_string`] turns any error into a one-line message, and recognizes a
//! [`HorizonError`] anywhere in the source chain so the user sees
//! `400: Transaction Failed (tx_failed: op_underfunded)` instead of a wall of
//! JSON.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt::{self, Write as _};

/// Transaction and per-operation result codes attached to a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCodes {
    /// Transaction-level result, e.g. `tx_failed`.
    #[serde(default)]
    pub transaction: String,
    /// One code per operation, e.g. `op_underfunded`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<String>,
}

impl fmt::Display for ResultCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.transaction)?;
        if !self.operations.is_empty() {
            write!(f, ": {}", self.operations.join(", "))?;
        }
        Ok(())
    }
}

/// The `extras` object of a problem document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemExtras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_codes: Option<ResultCodes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_xdr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_xdr: Option<String>,
}

/// An RFC 7807 problem document as returned by Horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// URI identifying the problem type.
    #[serde(rename = "type", default)]
    pub problem_type: String,
    /// Short human-readable summary.
    #[serde(default)]
    pub title: String,
    /// HTTP status code.
    #[serde(default)]
    pub status: u16,
    /// Longer explanation.
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<ProblemExtras>,
}

/// A failed Horizon request carrying its problem document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonError {
    pub problem: Problem,
}

impl HorizonError {
    pub fn new(problem: Problem) -> Self {
        Self { problem }
    }

    /// Parse a response body as a problem document.
    ///
    /// Returns `None` if the body is not JSON or does not look like a problem
    /// (no title and no status).
    pub fn from_body(body: &str) -> Option<Self> {
        let problem: Problem = serde_json::from_str(body).ok()?;
        if problem.title.is_empty() && problem.status == 0 {
            return None;
        }
        Some(Self { problem })
    }

    /// Result codes, when the failure was a transaction submission.
    pub fn result_codes(&self) -> Option<&ResultCodes> {
        self.problem.extras.as_ref()?.result_codes.as_ref()
    }
}

impl fmt::Display for HorizonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem.status, self.problem.title)
    }
}

impl StdError for HorizonError {}

/// Find the first [`HorizonError`] in `err`'s source chain, `err` included.
pub fn find_horizon_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a HorizonError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(herr) = e.downcast_ref::<HorizonError>() {
            return Some(herr);
        }
        current = e.source();
    }
    None
}

/// Render `err` for humans.
///
/// Horizon errors render as `status: title`, followed by ` (result codes)`
/// when the problem carries any. Everything else renders via `Display`.
///
/// With `show_detail`, Horizon errors also get their `Detail:` and `Type:`
/// lines, and every error gets its full source chain under `Caused by:`.
pub fn error_string(err: &(dyn StdError + 'static), show_detail: bool) -> String {
    let horizon = find_horizon_error(err);

    let mut out = match horizon {
        Some(herr) => {
            let mut s = herr.to_string();
            if let Some(codes) = herr.result_codes() {
                let _ = write!(s, " ({codes})");
            }
            s
        }
        None => err.to_string(),
    };

    if show_detail {
        if let Some(herr) = horizon {
            let _ = write!(
                out,
                "\nDetail: {}\nType: {}\n",
                herr.problem.detail, herr.problem.problem_type
            );
        }
        let mut source = err.source();
        if source.is_some() {
            out.push_str("\nCaused by:\n");
        }
        let mut depth = 0;
        while let Some(e) = source {
            let _ = writeln!(out, "  {depth}: {e}");
            depth += 1;
            source = e.source();
        }
    }

    out
}
