//! Use case for reporting the host's service worker capability.

use crate::usecases::register::ServiceWorkerHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportReport {
    pub supported: bool,
}

impl SupportReport {
    pub fn as_label(self) -> &'static str {
        if self.supported {
            "SW_SUPPORTED"
        } else {
            "SW_UNSUPPORTED"
        }
    }

    pub fn user_line(self) -> &'static str {
        if self.supported {
            "Service worker capability is available."
        } else {
            "Service worker capability is not available."
        }
    }
}

pub fn probe_support(host: &dyn ServiceWorkerHost) -> SupportReport {
    SupportReport {
        supported: host.supports_service_worker(),
    }
}
