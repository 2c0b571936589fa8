//! Diagnostic reports for failures.
//!
//! A report always starts with a one-line summary. Verbose reports add the
//! context, the originating function, and `file(line) : error C<code>:` marker
//! lines that editors such as emacs or Visual Studio can jump to.

use std::io::Write;

use crate::Failure;

/// Environment variable consulted by [`ReportOption::from_env`].
pub const DIAGNOSTIC_ENV: &str = "E57_DIAGNOSTIC_OUTPUT";

const SUMMARY_MARKER: &str = "**** Got an e57 exception: ";
const UNKNOWN: &str = "<unknown>";

/// Options controlling how failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOption {
    /// Include context and source locations in reports.
    pub verbose: bool,
}

impl Default for ReportOption {
    /// Verbosity follows the `diagnostic-output` cargo feature.
    fn default() -> Self {
        Self {
            verbose: cfg!(feature = "diagnostic-output"),
        }
    }
}

impl ReportOption {
    /// Options with the build-time default verbosity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn verbose reports on or off.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build options from the process environment.
    ///
    /// `E57_DIAGNOSTIC_OUTPUT` overrides the build default when it holds a
    /// recognizable boolean. Call this once at startup and pass the result around.
    pub fn from_env() -> Self {
        let value = std::env::var(DIAGNOSTIC_ENV).ok();
        Self::default().with_env_value(value.as_deref())
    }

    /// Apply an override value as read from [`DIAGNOSTIC_ENV`].
    pub fn with_env_value(self, value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return self;
        };
        match parse_flag(raw) {
            Some(verbose) => self.with_verbose(verbose),
            None => {
                tracing::warn!(
                    variable = DIAGNOSTIC_ENV,
                    value = raw,
                    "ignoring unrecognized diagnostic output setting"
                );
                self
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Where a failure is being reported from.
///
/// Usually captured with [`report_site!`](crate::report_site).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSite {
    /// Source file doing the reporting.
    pub file: &'static str,
    /// Line doing the reporting.
    pub line: u32,
    /// Enclosing function. Recorded, but not part of the report text.
    pub function: Option<&'static str>,
}

impl ReportSite {
    /// A site with a file and line but no function name.
    pub fn new(file: &'static str, line: u32) -> Self {
        Self {
            file,
            line,
            function: None,
        }
    }

    /// Record the enclosing function.
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

impl Failure {
    /// Write a diagnostic report using the build-time default options.
    pub fn report<W: Write + ?Sized>(&self, site: Option<&ReportSite>, out: &mut W) {
        self.report_with(&ReportOption::default(), site, out);
    }

    /// Write a diagnostic report to `out`.
    ///
    /// Reporting is an observability side channel: sink errors are dropped and
    /// never turn into a second failure. The reporting site only shows up in
    /// verbose reports.
    pub fn report_with<W: Write + ?Sized>(
        &self,
        option: &ReportOption,
        site: Option<&ReportSite>,
        out: &mut W,
    ) {
        if let Err(err) = self.write_report(option, site, out) {
            tracing::debug!(error = %err, "diagnostic report sink failed");
        }
    }

    fn write_report<W: Write + ?Sized>(
        &self,
        option: &ReportOption,
        site: Option<&ReportSite>,
        out: &mut W,
    ) -> std::io::Result<()> {
        writeln!(out, "{}{}", SUMMARY_MARKER, self.description())?;

        if !option.verbose {
            return Ok(());
        }

        writeln!(out, "  Debug info:")?;
        writeln!(out, "    context: {}", self.context())?;
        let function = self.origin_function().unwrap_or(UNKNOWN);
        writeln!(out, "    sourceFunctionName: {}", function)?;
        writeln!(
            out,
            "{}({}) : error C{}:  <--- occurred on",
            self.origin_file().unwrap_or(UNKNOWN),
            self.origin_line(),
            self.code()
        )?;
        if let Some(site) = site {
            writeln!(
                out,
                "{}({}) : error C0:  <--- reported on",
                site.file, site.line
            )?;
        }

        Ok(())
    }

    /// Render a report into a string.
    pub fn report_to_string(&self, option: &ReportOption, site: Option<&ReportSite>) -> String {
        let mut buf = Vec::new();
        self.report_with(option, site, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Emit this failure as a structured `tracing` error event.
    pub fn log(&self, site: Option<&ReportSite>) {
        let origin_file = self.origin_file().unwrap_or(UNKNOWN);
        let origin_function = self.origin_function().unwrap_or(UNKNOWN);
        match site {
            Some(site) => tracing::error!(
                code = self.code(),
                kind = self.kind().as_str(),
                context = self.context(),
                origin_file,
                origin_line = self.origin_line(),
                origin_function,
                reported_file = site.file,
                reported_line = site.line,
                "{}",
                self.description()
            ),
            None => tracing::error!(
                code = self.code(),
                kind = self.kind().as_str(),
                context = self.context(),
                origin_file,
                origin_line = self.origin_line(),
                origin_function,
                "{}",
                self.description()
            ),
        }
    }
}
