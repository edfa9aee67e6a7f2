use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// 1-based manifest line; 0 when no single line is at fault.
    pub line: usize,
    pub package: String,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    /// `file:line: package: message`, dropping the line when it is 0.
    fn located(&self, file: &str) -> String {
        if self.line == 0 {
            format!("{}: {}: {}", file, self.package, self.message)
        } else {
            format!("{}:{}: {}: {}", file, self.line, self.package, self.message)
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(
        &mut self,
        line: usize,
        package: impl Into<String>,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            line,
            package: package.into(),
            message: message.into(),
            severity: Severity::Error,
        };
        self.errors.push(diagnostic);
    }

    pub fn push_warning(
        &mut self,
        line: usize,
        package: impl Into<String>,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            line,
            package: package.into(),
            message: message.into(),
            severity: Severity::Warning,
        };
        self.warnings.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn emit(&self, file: &str) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}", diagnostic.located(file));
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}", diagnostic.located(file));
        }
    }

    /// Errors first, then warnings, each in discovery order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        let mut all = self.errors;
        all.extend(self.warnings);
        all
    }
}
