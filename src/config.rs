use log::Level;

/// Address demo requests are forwarded to, and the fallback users are told
/// to write to when the form fails.
pub const CONTACT_EMAIL: &str = "demo@clinicalops.io";

pub const DEMO_REQUEST_SUBJECT: &str = "New ClinicalOps Demo Request";
pub const DEMO_REQUEST_TEMPLATE: &str = "table";

pub const ROTATION_INTERVAL_MS: u32 = 3_000;
pub const STATUS_REVERT_MS: u32 = 5_000;

/// Scroll distance in pixels over which the navbar fades fully in.
pub const NAV_FADE_DISTANCE: f64 = 100.0;

pub fn get_form_relay_url() -> String {
    format!("https://formsubmit.co/ajax/{}", CONTACT_EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
