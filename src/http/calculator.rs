// ============================================================================
// Calculator Handlers
// HTML form, HTML result page and JSON evaluation endpoint
// ============================================================================

use axum::{
    extract::{rejection::JsonRejection, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ApiError;
use super::pages;
use crate::calculator::{Calculation, Operation};
use crate::numeric::{parse_decimal, NumericResult, Operand};

// ── Request / response types ──────────────────────────────────────────────────

/// Query string of `/calc_ui`. Operands arrive as raw text from the form.
#[derive(Debug, Deserialize)]
pub(super) struct CalcQuery {
    a: String,
    op: Operation,
    b: Option<String>,
}

/// Body of `POST /calc`
#[derive(Debug, Deserialize)]
pub(super) struct CalcRequest {
    a: Operand,
    #[serde(default)]
    b: Option<Operand>,
    op: Operation,
}

#[derive(Debug, Serialize)]
pub(super) struct CalcResponse {
    #[serde(flatten)]
    calculation: Calculation,
    expression: String,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /
pub(super) async fn home() -> Html<String> {
    Html(pages::calculator_home())
}

/// GET /calc_ui?a=..&op=..&b=..
///
/// Errors are reported as `400 text/plain` with the detail message. An empty
/// `b` (as sent by the form for square root) counts as absent.
pub(super) async fn calc_ui(Query(query): Query<CalcQuery>) -> Response {
    match compute_query(&query) {
        Ok(calc) => Html(pages::calculation_result(&calc)).into_response(),
        Err(e) => {
            warn!(op = %query.op, a = %query.a, "calculation rejected: {e}");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// POST /calc
///
/// Body rejections (bad JSON, unknown tag, out-of-bounds operand) are reported
/// as `400 {"detail"}` like arithmetic errors.
pub(super) async fn calc_json(
    payload: Result<Json<CalcRequest>, JsonRejection>,
) -> Result<Json<CalcResponse>, ApiError> {
    let Json(req) = payload.inspect_err(|e| warn!("calculation body rejected: {e}"))?;
    let calculation = Calculation::compute(req.a.value(), req.b.map(Operand::value), req.op)
        .inspect_err(|e| warn!(op = %req.op, "calculation rejected: {e}"))?;

    Ok(Json(CalcResponse {
        expression: calculation.expression(),
        calculation,
    }))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn compute_query(query: &CalcQuery) -> NumericResult<Calculation> {
    let a = parse_decimal(&query.a)?;
    let b = query
        .b
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(parse_decimal)
        .transpose()?;
    Calculation::compute(a, b, query.op)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn query(a: &str, op: Operation, b: Option<&str>) -> CalcQuery {
        CalcQuery {
            a: a.to_string(),
            op,
            b: b.map(str::to_string),
        }
    }

    #[test]
    fn empty_b_is_absent() {
        let calc = compute_query(&query("9", Operation::Sqrt, Some(""))).unwrap();
        assert_eq!(calc.expression(), "√(9) = 3");

        assert_eq!(
            compute_query(&query("9", Operation::Add, Some("  "))),
            Err(NumericError::MissingOperand)
        );
    }

    #[test]
    fn unparsable_operand() {
        assert_eq!(
            compute_query(&query("ten", Operation::Add, Some("1"))),
            Err(NumericError::InvalidInput)
        );
    }
}
