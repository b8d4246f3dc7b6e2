//! Use case for registering the worker script with the host environment.
//!
//! A missing capability is a silent no-op: no host call, no report. A present
//! capability leads to exactly one registration attempt with two terminal
//! outcomes, each reported exactly once. Failures never propagate to the
//! caller; registration is best-effort.

use crate::domain::{
    registration::{RegistrationHandle, RegistrationOutcome},
    script::ScriptPath,
};

/// Errors the host environment can reject a registration with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterSourceError {
    /// Fetching the worker script failed.
    Network { message: String },
    /// The fetched content was not acceptable as a worker script.
    ScriptParse { message: String },
    /// The script path falls outside the registrable scope.
    ScopeViolation { path: String },
    /// The host did not resolve the attempt in time.
    Timeout { millis: u64 },
}

impl std::fmt::Display for RegisterSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { message } => write!(f, "network failure: {message}"),
            Self::ScriptParse { message } => write!(f, "script parse failure: {message}"),
            Self::ScopeViolation { path } => write!(f, "scope violation: {path}"),
            Self::Timeout { millis } => write!(f, "registration timed out after {millis}ms"),
        }
    }
}

impl std::error::Error for RegisterSourceError {}

/// Contract over the host environment's service worker surface.
pub trait ServiceWorkerHost {
    /// Ambient capability query; absence means the guard must stay silent.
    fn supports_service_worker(&self) -> bool;

    /// Asks the host to install the worker script at `script_path`.
    ///
    /// # Errors
    /// Returns `RegisterSourceError` when the host rejects the attempt.
    fn register_worker(
        &mut self,
        script_path: &str,
    ) -> Result<RegistrationHandle, RegisterSourceError>;
}

impl<T: ServiceWorkerHost + ?Sized> ServiceWorkerHost for &mut T {
    fn supports_service_worker(&self) -> bool {
        (**self).supports_service_worker()
    }

    fn register_worker(
        &mut self,
        script_path: &str,
    ) -> Result<RegistrationHandle, RegisterSourceError> {
        (**self).register_worker(script_path)
    }
}

/// Continuation for the two terminal outcomes of a registration attempt.
pub trait OutcomeReporter {
    fn registered(&mut self, handle: &RegistrationHandle);
    fn registration_failed(&mut self, error: &RegisterSourceError);
}

/// Production reporter: one fixed line per outcome via tracing.
pub struct TracingReporter;

impl OutcomeReporter for TracingReporter {
    fn registered(&mut self, handle: &RegistrationHandle) {
        tracing::info!(
            code = RegistrationOutcome::Registered.as_label(),
            script = %handle.script,
            scope = %handle.scope,
            "service worker registered"
        );
    }

    fn registration_failed(&mut self, error: &RegisterSourceError) {
        tracing::warn!(
            code = RegistrationOutcome::Failed.as_label(),
            error = %error,
            "service worker registration failed"
        );
    }
}

/// Runs the capability guard and, when the capability exists, one
/// registration attempt.
///
/// The script path reaches the host verbatim. Repeated invocations produce
/// independent attempts; the host owns any dedup/update semantics.
pub fn register_worker(
    host: &mut dyn ServiceWorkerHost,
    reporter: &mut dyn OutcomeReporter,
    script: &ScriptPath,
) -> RegistrationOutcome {
    if !host.supports_service_worker() {
        return RegistrationOutcome::Skipped;
    }

    match host.register_worker(script.as_str()) {
        Ok(handle) => {
            reporter.registered(&handle);
            RegistrationOutcome::Registered
        }
        Err(error) => {
            reporter.registration_failed(&error);
            RegistrationOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubHost {
        supported: bool,
        result: Result<RegistrationHandle, RegisterSourceError>,
        attempts: usize,
        captured_path: Option<String>,
    }

    impl StubHost {
        fn with_result(result: Result<RegistrationHandle, RegisterSourceError>) -> Self {
            Self {
                supported: true,
                result,
                attempts: 0,
                captured_path: None,
            }
        }

        fn unsupported() -> Self {
            Self {
                supported: false,
                result: Ok(handle("/sw.js")),
                attempts: 0,
                captured_path: None,
            }
        }
    }

    impl ServiceWorkerHost for StubHost {
        fn supports_service_worker(&self) -> bool {
            self.supported
        }

        fn register_worker(
            &mut self,
            script_path: &str,
        ) -> Result<RegistrationHandle, RegisterSourceError> {
            self.attempts += 1;
            self.captured_path = Some(script_path.to_owned());
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        successes: Vec<RegistrationHandle>,
        failures: Vec<RegisterSourceError>,
    }

    impl OutcomeReporter for RecordingReporter {
        fn registered(&mut self, handle: &RegistrationHandle) {
            self.successes.push(handle.clone());
        }

        fn registration_failed(&mut self, error: &RegisterSourceError) {
            self.failures.push(error.clone());
        }
    }

    fn handle(script: &str) -> RegistrationHandle {
        RegistrationHandle {
            script: script.to_owned(),
            scope: "/".to_owned(),
        }
    }

    #[test]
    fn unsupported_host_skips_without_attempt_or_report() {
        let mut host = StubHost::unsupported();
        let mut reporter = RecordingReporter::default();

        let outcome = register_worker(&mut host, &mut reporter, &ScriptPath::default());

        assert_eq!(outcome, RegistrationOutcome::Skipped);
        assert_eq!(host.attempts, 0);
        assert!(host.captured_path.is_none());
        assert!(reporter.successes.is_empty());
        assert!(reporter.failures.is_empty());
    }

    #[test]
    fn successful_registration_reports_exactly_once() {
        let mut host = StubHost::with_result(Ok(handle("/static/js/sw.js")));
        let mut reporter = RecordingReporter::default();

        let outcome = register_worker(&mut host, &mut reporter, &ScriptPath::default());

        assert_eq!(outcome, RegistrationOutcome::Registered);
        assert_eq!(host.attempts, 1);
        assert_eq!(reporter.successes.len(), 1);
        assert!(reporter.failures.is_empty());
    }

    #[test]
    fn failed_registration_reports_the_error_exactly_once() {
        let error = RegisterSourceError::Network {
            message: "worker script fetch failed".to_owned(),
        };
        let mut host = StubHost::with_result(Err(error.clone()));
        let mut reporter = RecordingReporter::default();

        let outcome = register_worker(&mut host, &mut reporter, &ScriptPath::default());

        assert_eq!(outcome, RegistrationOutcome::Failed);
        assert!(reporter.successes.is_empty());
        assert_eq!(reporter.failures, vec![error]);
        assert!(reporter.failures[0]
            .to_string()
            .contains("worker script fetch failed"));
    }

    #[test]
    fn passes_script_path_to_host_verbatim() {
        let mut host = StubHost::with_result(Ok(handle("/a b/../sw.js")));
        let mut reporter = RecordingReporter::default();

        let _ = register_worker(&mut host, &mut reporter, &ScriptPath::new("/a b/../sw.js"));

        assert_eq!(host.captured_path.as_deref(), Some("/a b/../sw.js"));
    }

    #[test]
    fn repeated_invocations_attempt_registration_each_time() {
        let mut host = StubHost::with_result(Ok(handle("/static/js/sw.js")));
        let mut reporter = RecordingReporter::default();
        let script = ScriptPath::default();

        let _ = register_worker(&mut host, &mut reporter, &script);
        let _ = register_worker(&mut host, &mut reporter, &script);

        assert_eq!(host.attempts, 2);
        assert_eq!(reporter.successes.len(), 2);
    }
}
