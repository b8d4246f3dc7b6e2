//! Domain layer: worker script identity and registration outcomes.

pub mod registration;
pub mod script;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
