//! Step definitions for the outcome rendering scenarios.

use crate::fixtures::{Address, ECode, Lookup, OutcomeContext, Token};
use anyhow::{Context, Result, anyhow, ensure};
use qresult::{CResult, Cause, ConstructionError, DiscreteCode, QResult, Value};
use rstest_bdd_macros::{then, when};
use test_helpers::DiagnosticCapture;
use test_helpers::text::{strip_caller, unquote};

fn code_named(name: &str) -> Result<ECode> {
    ECode::members()
        .and_then(|members| members.iter().find(|code| code.name() == name))
        .copied()
        .ok_or_else(|| anyhow!("unknown code {name}"))
}

fn timeout(message: &str) -> Cause {
    Cause::from(std::io::Error::other(message.to_owned()))
}

fn record<T: std::fmt::Display>(
    outcome_context: &OutcomeContext,
    built: Result<T, ConstructionError>,
) {
    match built {
        Ok(outcome) => outcome_context.rendered.set(outcome.to_string()),
        Err(err) => outcome_context.error.set(err.to_string()),
    }
}

#[when("the lookup fails with code {code} and reason {reason}")]
fn lookup_fails(outcome_context: &OutcomeContext, code: String, reason: String) -> Result<()> {
    let code = code_named(unquote(&code))?;
    record(outcome_context, CResult::<Lookup>::fail(code, unquote(&reason)));
    Ok(())
}

#[when("the lookup wraps {message} with code {code} and reason {reason}")]
fn lookup_fails_with_cause_and_reason(
    outcome_context: &OutcomeContext,
    message: String,
    code: String,
    reason: String,
) -> Result<()> {
    let code = code_named(unquote(&code))?;
    let built =
        CResult::<Lookup>::fail_with_reason(code, timeout(unquote(&message)), unquote(&reason));
    record(outcome_context, built);
    Ok(())
}

#[when("the lookup fails with code {code} wrapping {message}")]
fn lookup_fails_with_cause(
    outcome_context: &OutcomeContext,
    code: String,
    message: String,
) -> Result<()> {
    let code = code_named(unquote(&code))?;
    record(
        outcome_context,
        CResult::<Lookup>::fail_with(code, timeout(unquote(&message))),
    );
    Ok(())
}

#[when("the address resolves to {street} number {number}")]
fn address_resolves(outcome_context: &OutcomeContext, street: String, number: i64) {
    let outcome = QResult::<Address>::ok((unquote(&street).to_owned(), number));
    outcome_context.rendered.set(outcome.to_string());
}

#[when("the address fails with reason {reason}")]
fn address_fails(outcome_context: &OutcomeContext, reason: String) {
    record(outcome_context, QResult::<Address>::fail(unquote(&reason)));
}

#[when("a token succeeds with the float {value}")]
fn token_succeeds(outcome_context: &OutcomeContext, value: f64) {
    let capture = DiagnosticCapture::install();
    let outcome = QResult::<Token>::ok(Value::Float(value));
    outcome_context.rendered.set(outcome.to_string());
    outcome_context
        .diagnostics
        .set(capture.messages_for("Token"));
}

#[then("the rendering is {expected}")]
fn rendering_is(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let rendered = outcome_context
        .rendered
        .get()
        .context("an outcome must have been built")?;
    ensure!(
        strip_caller(&rendered) == unquote(&expected),
        "unexpected rendering: {rendered}"
    );
    Ok(())
}

#[then("the failure records its caller")]
fn records_caller(outcome_context: &OutcomeContext) -> Result<()> {
    let rendered = outcome_context
        .rendered
        .get()
        .context("an outcome must have been built")?;
    ensure!(
        rendered.contains(" caller: ") && rendered.contains("steps.rs"),
        "caller missing from {rendered}"
    );
    Ok(())
}

#[then("no caller is recorded")]
fn no_caller(outcome_context: &OutcomeContext) -> Result<()> {
    let rendered = outcome_context
        .rendered
        .get()
        .context("an outcome must have been built")?;
    ensure!(!rendered.contains(" caller: "), "unexpected caller in {rendered}");
    Ok(())
}

#[then("construction fails with {message}")]
fn construction_fails(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let error = outcome_context
        .error
        .take()
        .context("construction should have failed")?;
    ensure!(error == unquote(&message), "unexpected error: {error}");
    Ok(())
}

#[then("a diagnostic reads {message}")]
fn diagnostic_reads(outcome_context: &OutcomeContext, message: String) -> Result<()> {
    let diagnostics = outcome_context
        .diagnostics
        .get()
        .context("diagnostics should have been captured")?;
    let expected = unquote(&message);
    ensure!(
        diagnostics.iter().any(|seen| seen == expected),
        "missing diagnostic {expected} in {diagnostics:?}"
    );
    Ok(())
}
