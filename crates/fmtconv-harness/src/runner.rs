//! Test execution engine.

use std::io::Write;
use std::time::Instant;

use fmtconv_core::convert::{
    FloatPrecision, IntWidth, number_to_text, reinterpret_word, text_to_float, text_to_integer,
    to_fixed_width, to_float,
};
use fmtconv_core::scan::{self, ScanInput};
use fmtconv_core::{Value, render};
use serde_json::Value as Json;

use crate::args::{describe, parse_arg, parse_kind};
use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign, used as the trace id prefix.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| verify_case(&fixture_set.family, case).0)
            .collect()
    }

    /// Like [`TestRunner::run`], also writing one log entry per case
    /// between `run_start` and `run_finish` entries.
    pub fn run_logged<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter<W>,
    ) -> std::io::Result<Vec<VerificationResult>> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "run_start").with_details(serde_json::json!({
                "campaign": self.campaign,
                "family": fixture_set.family,
                "version": fixture_set.version,
                "cases": fixture_set.cases.len(),
            })),
        )?;

        let started = Instant::now();
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let case_started = Instant::now();
            let (result, outcome) = verify_case(&fixture_set.family, case);
            let level = match outcome {
                Outcome::Pass => LogLevel::Info,
                Outcome::Fail => LogLevel::Warn,
                Outcome::Error => LogLevel::Error,
            };
            let mut entry = LogEntry::new("", level, "case_result")
                .with_operation(&case.operation)
                .with_case(&case.name)
                .with_outcome(outcome)
                .with_duration_us(elapsed_us(case_started));
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            log.emit_entry(entry)?;
            results.push(result);
        }

        let passed = results.iter().filter(|r| r.passed).count();
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "run_finish")
                .with_duration_us(elapsed_us(started))
                .with_details(serde_json::json!({
                    "total": results.len(),
                    "passed": passed,
                    "failed": results.len() - passed,
                })),
        )?;
        log.flush()?;
        Ok(results)
    }
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}

fn verify_case(family: &str, case: &FixtureCase) -> (VerificationResult, Outcome) {
    let (actual, outcome) = match execute_case(case) {
        Ok(actual) if actual == case.expected_output => (actual, Outcome::Pass),
        Ok(actual) => (actual, Outcome::Fail),
        Err(err) => (format!("unsupported:{err}"), Outcome::Error),
    };
    let result = VerificationResult {
        family: family.to_string(),
        case_name: case.name.clone(),
        operation: case.operation.clone(),
        passed: outcome == Outcome::Pass,
        expected: case.expected_output.clone(),
        actual,
    };
    (result, outcome)
}

/// Execute one fixture case and return its textual output.
///
/// Conversion failures are part of the output (`error:<message>`); only
/// malformed fixtures produce `Err`.
pub fn execute_case(case: &FixtureCase) -> Result<String, HarnessError> {
    let inputs = &case.inputs;
    match case.operation.as_str() {
        "render" => {
            let template = str_field(inputs, "template")?;
            let args = match inputs.get("args") {
                Some(Json::Array(items)) => items
                    .iter()
                    .map(|item| {
                        item.as_str()
                            .ok_or_else(|| HarnessError::bad_input("args", "expected strings"))
                            .and_then(parse_arg)
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                Some(_) => return Err(HarnessError::bad_input("args", "expected an array")),
                None => Vec::new(),
            };
            Ok(render(template, &args))
        }
        "to_fixed_width" => {
            let value = parse_arg(str_field(inputs, "value")?)?;
            let bits = inputs
                .get("width")
                .and_then(Json::as_u64)
                .and_then(|w| u32::try_from(w).ok())
                .and_then(IntWidth::from_bits)
                .ok_or_else(|| HarnessError::bad_input("width", "expected 8, 16, 32 or 64"))?;
            let signed = bool_field(inputs, "signed")?;
            Ok(describe(&to_fixed_width(&value, bits, signed)))
        }
        "reinterpret_word" => {
            let value = parse_arg(str_field(inputs, "value")?)?;
            let signed = bool_field(inputs, "signed")?;
            Ok(describe(&reinterpret_word(&value, signed)))
        }
        "to_float" => {
            let value = parse_arg(str_field(inputs, "value")?)?;
            let precision = precision_field(inputs)?;
            Ok(describe(&to_float(&value, precision)))
        }
        "number_to_text" => {
            let value = parse_arg(str_field(inputs, "value")?)?;
            Ok(number_to_text(&value))
        }
        "text_to_integer" => {
            let res = text_to_integer(str_field(inputs, "text")?);
            Ok(match res.error {
                None => format!("ok:{}", res.value),
                Some(err) => format!("error:{err}"),
            })
        }
        "text_to_float" => {
            let precision = precision_field(inputs)?;
            let res = text_to_float(str_field(inputs, "text")?, precision);
            let value = match precision {
                FloatPrecision::Single => Value::Float32(res.value as f32),
                FloatPrecision::Double => Value::Float64(res.value),
            };
            Ok(match res.error {
                None => format!("ok:{value}"),
                Some(err) => format!("error:{err}"),
            })
        }
        "scan" => run_scan(inputs),
        other => Err(HarnessError::UnknownOperation(other.to_string())),
    }
}

/// Run a sequence of read steps over one input text.
///
/// Each step contributes one `|`-separated field: the described target(s),
/// or `error:<message>` after which the remaining steps are skipped.
fn run_scan(inputs: &Json) -> Result<String, HarnessError> {
    let text = str_field(inputs, "input")?;
    let steps = inputs
        .get("steps")
        .and_then(Json::as_array)
        .ok_or_else(|| HarnessError::bad_input("steps", "expected an array"))?;

    let mut input = ScanInput::new(text.as_bytes());
    let mut fields = Vec::with_capacity(steps.len());
    for step in steps {
        let op = str_field(step, "op")?;
        let outcome = match op {
            "token" | "line" => {
                let mut target = parse_kind(str_field(step, "kind")?)?.zero();
                let res = if op == "token" {
                    scan::read_token(&mut input, &mut target)
                } else {
                    scan::read_line(&mut input, &mut target)
                };
                res.map(|()| describe(&target))
            }
            "formatted" => {
                let format = str_field(step, "format")?;
                let mut targets = step
                    .get("kinds")
                    .and_then(Json::as_array)
                    .ok_or_else(|| HarnessError::bad_input("kinds", "expected an array"))?
                    .iter()
                    .map(|k| {
                        k.as_str()
                            .ok_or_else(|| HarnessError::bad_input("kinds", "expected strings"))
                            .and_then(parse_kind)
                            .map(|kind| kind.zero())
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                scan::read_formatted(&mut input, format, &mut targets).map(|filled| {
                    targets[..filled]
                        .iter()
                        .map(describe)
                        .collect::<Vec<_>>()
                        .join(",")
                })
            }
            other => return Err(HarnessError::bad_input("op", format!("unknown step '{other}'"))),
        };
        match outcome {
            Ok(field) => fields.push(field),
            Err(err) => {
                fields.push(format!("error:{err}"));
                break;
            }
        }
    }
    Ok(fields.join("|"))
}

fn str_field<'a>(inputs: &'a Json, field: &str) -> Result<&'a str, HarnessError> {
    inputs
        .get(field)
        .and_then(Json::as_str)
        .ok_or_else(|| HarnessError::bad_input(field, "expected a string"))
}

fn bool_field(inputs: &Json, field: &str) -> Result<bool, HarnessError> {
    inputs
        .get(field)
        .and_then(Json::as_bool)
        .ok_or_else(|| HarnessError::bad_input(field, "expected a boolean"))
}

fn precision_field(inputs: &Json) -> Result<FloatPrecision, HarnessError> {
    let name = str_field(inputs, "precision")?;
    FloatPrecision::from_name(name)
        .ok_or_else(|| HarnessError::bad_input("precision", format!("unknown precision '{name}'")))
}
