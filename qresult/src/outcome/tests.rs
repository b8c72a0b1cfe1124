//! Unit tests for outcome construction, accessors and rendering.

use std::borrow::Cow;
use std::error::Error as _;
use std::sync::Arc;

use parking_lot::Mutex;
use rstest::rstest;
use rust_decimal::Decimal;
use serial_test::serial;
use thiserror::Error;

use super::*;
use crate::code::DiscreteCode;
use crate::conformance::ConformanceError;
use crate::diagnostics::scoped_reporter;
use crate::value::Value;
use crate::{Diagnostic, here};

#[derive(Debug, Error)]
#[error("timed out")]
struct TimeoutSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, crate::DiscreteCode)]
#[code(rename_all = "SCREAMING_SNAKE_CASE")]
enum ECode {
    Invalid,
    Unknown,
    Timeout,
}

#[derive(crate::CResult)]
#[qresult(Self, ECode, (String, i64, Vec<Decimal>))]
struct Lookup;

#[derive(crate::QResult)]
#[qresult(Self, (String, i64, Vec<Decimal>))]
struct Address;

#[derive(crate::QResult)]
#[qresult(Self, Union<String, i64>)]
struct Token;

#[derive(crate::CResult)]
#[qresult(Self, i32, i64)]
struct Numbered;

/// A code type whose `Retired` variant is no longer a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Retired,
}

impl DiscreteCode for Phase {
    const TYPE_NAME: &'static str = "Phase";

    fn members() -> Option<&'static [Self]> {
        Some(&[Self::Active])
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Active => "Active",
            Self::Retired => "Retired",
        })
    }
}

#[derive(crate::CResult)]
#[qresult(Self, Phase, String)]
struct Lifecycle;

fn address() -> (String, i64, Vec<Decimal>) {
    (
        "123 Main St".to_owned(),
        2,
        vec![Decimal::new(34_500, 2), Decimal::new(56_700, 2)],
    )
}

#[rstest]
fn plain_success_renders_the_payload() {
    let outcome = QResult::<Address>::ok(address());
    assert!(outcome.is_ok());
    assert_eq!(outcome.result(), Some(&address()));
    assert!(outcome.caller_location().is_none());
    assert_eq!(
        outcome.render(RenderOptions::bare()),
        "OK result: `('123 Main St', 2, [345.00, 567.00])`"
    );
    assert_eq!(
        outcome.ppstr(true),
        "<Address> OK result: `('123 Main St', 2, [345.00, 567.00])`"
    );
}

#[rstest]
fn coded_success_uses_the_coded_wording() {
    let outcome = CResult::<Lookup>::ok(address());
    assert_eq!(outcome.code(), None);
    assert_eq!(
        outcome.to_string(),
        "<Lookup> OK result=('123 Main St', 2, [345.00, 567.00])"
    );
}

#[rstest]
fn coded_failure_with_cause_renders_the_cause() {
    let outcome =
        CResult::<Lookup>::fail_with(ECode::Timeout, TimeoutSignal).expect("valid failure");
    assert!(outcome.is_not_ok());
    assert!(outcome.has_cause());
    assert!(outcome.caller_location().is_none());
    assert_eq!(
        outcome.render(RenderOptions::default().with_caller(false).with_type(false)),
        "ERR code: TIMEOUT, ex: timed out"
    );
}

#[rstest]
fn coded_failure_with_reason_records_the_caller() {
    let (outcome, line) = (
        CResult::<Lookup>::fail(ECode::Invalid, "invalid data").expect("valid failure"),
        line!(),
    );
    assert_eq!(
        outcome.render(RenderOptions::bare()),
        "FAIL code: INVALID reason: invalid data"
    );
    assert!(!outcome.has_cause());
    assert_eq!(outcome.reason(), Some("invalid data"));
    let caller = outcome.caller_location().expect("caller recorded");
    assert_eq!(caller.line(), line - 1);
    assert!(caller.file().ends_with("tests.rs"));
    assert_eq!(
        outcome.ppstr(false),
        format!("FAIL code: INVALID reason: invalid data caller: {caller}")
    );
}

#[rstest]
fn plain_failures_backtick_the_reason_and_cause() {
    let with_reason = QResult::<Address>::fail("unknown data").expect("valid failure");
    assert!(!with_reason.has_cause());
    assert_eq!(
        with_reason.render(RenderOptions::bare()),
        "FAIL reason: `unknown data`"
    );
    let with_cause = QResult::<Address>::fail_with(TimeoutSignal);
    assert_eq!(
        with_cause.render(RenderOptions::bare()),
        "ERR ex: `timed out`"
    );
    let with_both =
        QResult::<Address>::fail_with_reason(TimeoutSignal, "lookup").expect("valid failure");
    assert_eq!(
        with_both.render(RenderOptions::bare().with_type(true)),
        "<Address> ERR ex: `timed out` reason: `lookup`"
    );
    assert!(with_both.caller_location().is_none());
}

#[rstest]
fn successes_yield_their_payload_once_consumed() {
    assert_eq!(QResult::<Address>::ok(address()).into_value(), Some(address()));
    assert_eq!(CResult::<Lookup>::ok(address()).into_value(), Some(address()));
}

#[rstest]
fn failures_yield_no_payload_once_consumed() {
    let plain = QResult::<Address>::fail("unknown data").expect("valid failure");
    assert_eq!(plain.into_value(), None);
    let coded =
        CResult::<Lookup>::fail_with(ECode::Timeout, TimeoutSignal).expect("valid failure");
    assert_eq!(coded.into_value(), None);
}

#[rstest]
fn fail_macro_names_the_routine_for_both_families() {
    let plain = crate::fail!(QResult<Address>, "unknown data").expect("valid failure");
    assert_eq!(
        plain.caller_location().and_then(CallerLocation::routine),
        Some("fail_macro_names_the_routine_for_both_families")
    );
    let coded = crate::fail!(CResult<Lookup>, ECode::Unknown, "missing").expect("valid failure");
    assert!(
        coded
            .ppstr(false)
            .starts_with("FAIL code: UNKNOWN reason: missing caller: "),
        "{coded}"
    );
    assert!(
        coded
            .ppstr(false)
            .contains(" fail_macro_names_the_routine_for_both_families():"),
        "{coded}"
    );
}

#[rstest]
fn explicit_locations_name_the_routine() {
    let outcome = QResult::<Address>::fail_at(here!(), Some("invalid data".to_owned()), None)
        .expect("valid failure");
    let rendered = outcome.ppstr(false);
    assert!(
        rendered.contains("explicit_locations_name_the_routine():"),
        "{rendered}"
    );
}

#[rstest]
#[case::neither(None, false, ConstructionError::MissingReasonAndCause)]
#[case::blank(Some(""), false, ConstructionError::BlankReason)]
#[case::whitespace(Some("   "), false, ConstructionError::BlankReason)]
#[case::blank_with_cause(Some(" "), true, ConstructionError::BlankReasonWithCause)]
fn construction_misuse_is_rejected(
    #[case] reason: Option<&str>,
    #[case] with_cause: bool,
    #[case] expected: ConstructionError,
) {
    let cause = with_cause.then(|| Cause::new(TimeoutSignal));
    let plain = QResult::<Address>::fail_parts(reason.map(str::to_owned), cause.clone())
        .expect_err("misuse rejected");
    assert_eq!(plain, expected);
    let coded = CResult::<Lookup>::fail_parts(ECode::Unknown, reason.map(str::to_owned), cause)
        .expect_err("misuse rejected");
    assert_eq!(coded, expected);
}

#[rstest]
fn codes_outside_the_members_are_rejected() {
    let error = CResult::<Lifecycle>::fail(Phase::Retired, "gone").expect_err("not a member");
    assert_eq!(
        error,
        ConstructionError::CodeNotMember {
            code: "Retired".to_owned(),
            code_type: "Phase",
        }
    );
    assert!(CResult::<Lifecycle>::fail(Phase::Active, "paused").is_ok());
}

#[rstest]
fn non_enumerated_code_types_reject_every_failure() {
    let error = CResult::<Numbered>::fail(7, "seven").expect_err("not enumerated");
    assert_eq!(
        error,
        ConstructionError::CodeNotEnumerated { code_type: "i32" }
    );
    assert!(CResult::<Numbered>::ok(7).is_ok());
}

#[rstest]
fn code_checks_precede_reason_checks() {
    let error = CResult::<Lifecycle>::fail_parts(Phase::Retired, None, None)
        .expect_err("rejected");
    assert!(matches!(error, ConstructionError::CodeNotMember { .. }));
}

#[rstest]
#[serial]
fn non_conforming_successes_are_reported_and_kept() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _guard = scoped_reporter(Arc::new(move |diagnostic: &Diagnostic| {
        if diagnostic.outcome() == "Token" {
            sink.lock().push(diagnostic.to_string());
        }
    }));

    let outcome = QResult::<Token>::ok(Value::Float(1.5));

    assert!(outcome.is_ok());
    assert_eq!(
        *seen.lock(),
        vec!["Token.ok: value 1.5 must match one of [text, int]".to_owned()]
    );
}

#[rstest]
fn strict_successes_surface_the_mismatch() {
    let error = QResult::<Token>::try_ok(Value::Float(1.5)).expect_err("mismatch");
    assert!(matches!(error, ConformanceError::NoAlternative { .. }));
    assert!(QResult::<Token>::try_ok(Value::from("abc")).is_ok());
}

#[rstest]
fn failures_convert_into_errors() {
    let outcome =
        CResult::<Lookup>::fail_with(ECode::Timeout, TimeoutSignal).expect("valid failure");
    let error = outcome.to_error().expect("failure converts");
    assert_eq!(error.outcome(), "Lookup");
    assert_eq!(error.code(), Some("TIMEOUT"));
    assert_eq!(error.to_string(), "<Lookup> ERR code: TIMEOUT, ex: timed out");
    let source = error.source().expect("cause exposed");
    assert_eq!(source.to_string(), "timed out");

    let converted = outcome.into_result().expect_err("failure propagates");
    assert_eq!(converted.code(), Some("TIMEOUT"));
    assert!(CResult::<Lookup>::ok(address()).to_error().is_none());
}

#[rstest]
fn outcomes_are_detected_without_naming_the_family() {
    let outcomes: Vec<Box<dyn OutcomeBase>> = vec![
        Box::new(QResult::<Address>::ok(address())),
        Box::new(QResult::<Address>::fail("invalid data").expect("valid failure")),
        Box::new(CResult::<Lookup>::fail(ECode::Unknown, "unknown data").expect("valid failure")),
    ];
    let signals: Vec<bool> = outcomes
        .iter()
        .map(|outcome| is_failure_signal(outcome.as_ref()))
        .collect();
    assert_eq!(signals, vec![false, true, true]);
    let codes: Vec<Option<String>> = outcomes
        .iter()
        .map(|outcome| outcome.code_name().map(Cow::into_owned))
        .collect();
    assert_eq!(codes, vec![None, None, Some("UNKNOWN".to_owned())]);
}

#[rstest]
fn clones_share_the_cause() {
    let outcome = QResult::<Address>::fail_with(TimeoutSignal);
    let copy = outcome.clone();
    assert!(
        copy.cause()
            .and_then(Cause::downcast_ref::<TimeoutSignal>)
            .is_some()
    );
    assert_eq!(copy.to_string(), outcome.to_string());
}
