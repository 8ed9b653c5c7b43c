use anyhow::Result;
use recovery_core::math::encode;
use recovery_core::{ReconstructionResult, RecoveryError, SearchStrategy};
use serde::Serialize;

use crate::args::OutputFormat;

#[derive(Serialize)]
struct CaseReport<'a> {
    case: usize,
    #[serde(flatten)]
    result: Option<&'a ReconstructionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    echoed_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// How each case is printed.
#[derive(Debug, Clone, Copy)]
pub struct Render {
    pub format: OutputFormat,
    /// Also write the secret in this base.
    pub echo_base: Option<u32>,
}

impl Render {
    /// Render the outcome of case number `case` (1-based).
    pub fn case(
        &self,
        case: usize,
        outcome: &Result<ReconstructionResult, RecoveryError>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Text => self.text(case, outcome),
            OutputFormat::Json => self.json(case, outcome),
        }
    }

    fn echoed(&self, result: &ReconstructionResult) -> Result<Option<String>> {
        self.echo_base
            .map(|base| encode(base, &result.secret))
            .transpose()
            .map_err(Into::into)
    }

    fn text(
        &self,
        case: usize,
        outcome: &Result<ReconstructionResult, RecoveryError>,
    ) -> Result<String> {
        let result = match outcome {
            Ok(result) => result,
            Err(err) => return Ok(format!("Test Case {case} Error: {err}")),
        };

        let mut lines = vec![format!("Test Case {case} Secret: {}", result.secret)];
        if let (Some(base), Some(echoed)) = (self.echo_base, self.echoed(result)?) {
            lines.push(format!("Test Case {case} Secret (base {base}): {echoed}"));
        }
        if result.strategy != SearchStrategy::Direct {
            let wrong: Vec<String> =
                result.outliers.iter().map(ToString::to_string).collect();
            lines.push(format!("Test Case {case} Wrong Points: {}", wrong.join(" ")));
        }
        Ok(lines.join("\n"))
    }

    fn json(
        &self,
        case: usize,
        outcome: &Result<ReconstructionResult, RecoveryError>,
    ) -> Result<String> {
        let report = match outcome {
            Ok(result) => CaseReport {
                case,
                result: Some(result),
                echoed_secret: self.echoed(result)?,
                error: None,
            },
            Err(err) => CaseReport {
                case,
                result: None,
                echoed_secret: None,
                error: Some(err.to_string()),
            },
        };
        Ok(serde_json::to_string(&report)?)
    }
}
