// Callee pattern matching: test a call's callee against a regex over its
// canonical text form.
//
// This is a convenience matcher, not a semantic one: two equivalent callees
// that serialize differently will not both match a pattern tuned to one
// form.

use crate::domain::error::AnalysisError;
use crate::domain::snapshot::Subject;
use crate::ports::NodePrinter;
use regex::Regex;

/// A compiled pattern over canonical callee text.
#[derive(Debug, Clone)]
pub struct CalleeMatcher {
    pattern: Regex,
}

/// An owned match: the matched text plus capture groups (group 0 is the
/// whole match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalleeMatch {
    pub text: String,
    pub groups: Vec<Option<String>>,
}

impl CalleeMatcher {
    pub fn new(pattern: &str) -> Result<Self, AnalysisError> {
        let pattern = Regex::new(pattern).map_err(|e| AnalysisError::BadPattern {
            reason: e.to_string(),
        })?;
        Ok(CalleeMatcher { pattern })
    }

    pub fn from_regex(pattern: Regex) -> Self {
        CalleeMatcher { pattern }
    }

    /// Match the callee of a call-expression subject. `Ok(None)` both when
    /// the callee text does not match and when the subject has no callee
    /// at all; `Err` when the callee cannot be printed.
    pub fn captures<'a>(
        &self,
        subject: impl Into<Subject<'a>>,
        printer: &dyn NodePrinter,
    ) -> Result<Option<CalleeMatch>, AnalysisError> {
        let Some(callee) = subject.into().node().child("callee") else {
            return Ok(None);
        };
        let text = printer.print(callee)?;
        Ok(self.pattern.captures(&text).map(|caps| CalleeMatch {
            text: caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
            groups: caps
                .iter()
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }))
    }

    pub fn is_match<'a>(
        &self,
        subject: impl Into<Subject<'a>>,
        printer: &dyn NodePrinter,
    ) -> Result<bool, AnalysisError> {
        Ok(self.captures(subject, printer)?.is_some())
    }
}
