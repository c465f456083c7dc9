//! Verification results and their summary.

use serde::Serialize;

/// Outcome of one fixture case.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub family: String,
    pub case_name: String,
    pub operation: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Totals over a run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Markdown report listing every case.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# fmtconv fixture report\n\n");
        out.push_str(&format!(
            "total={} passed={} failed={}\n\n",
            self.total, self.passed, self.failed
        ));
        out.push_str("| family | case | operation | status |\n|---|---|---|---|\n");
        for r in &self.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {status} |\n",
                r.family, r.case_name, r.operation
            ));
        }
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!(
                    "\n### {}\n\n- expected: `{:?}`\n- actual:   `{:?}`\n",
                    r.case_name, r.expected, r.actual
                ));
            }
        }
        out
    }
}
