//! Flash message auto-dismiss.
//!
//! Each message present at load fades after `dismiss_after_ms` and is
//! removed `remove_after_ms` later. The fade itself is CSS on the
//! dismissing class.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::FlashConfig;
use crate::dom;
use crate::error::Result;

pub const SELECTOR: &str = ".flash-message";
pub const DISMISSING_CLASS: &str = "flash-message--dismissing";

/// Milliseconds after attach at which a message fades and is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSchedule {
    pub fade_at: u32,
    pub remove_at: u32,
}

impl FlashSchedule {
    pub fn new(config: &FlashConfig) -> Self {
        Self {
            fade_at: config.dismiss_after_ms,
            remove_at: config.dismiss_after_ms.saturating_add(config.remove_after_ms),
        }
    }

    /// Delay of the removal timer, counted from the fade
    pub fn remove_delay(&self) -> u32 {
        self.remove_at - self.fade_at
    }
}

pub fn bind(doc: &Document, config: &FlashConfig) -> Result<()> {
    let messages = dom::query_all(doc, SELECTOR)?;
    let schedule = FlashSchedule::new(config);
    log::debug!("scheduling dismissal of {} flash message(s)", messages.len());

    for message in messages {
        Timeout::new(schedule.fade_at, move || {
            if let Err(e) = dom::set_class(&message, DISMISSING_CLASS, true) {
                log::warn!("flash fade failed: {}", e);
            }
            Timeout::new(schedule.remove_delay(), move || message.remove()).forget();
        })
        .forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_window() {
        let schedule = FlashSchedule::new(&FlashConfig::default());
        assert_eq!(schedule.fade_at, 5000);
        assert_eq!(schedule.remove_at, 5300);
        assert_eq!(schedule.remove_delay(), 300);
        assert!(schedule.remove_at >= 5000 && schedule.remove_at <= 5300);
    }

    #[test]
    fn test_removal_never_precedes_fade() {
        let config = FlashConfig { dismiss_after_ms: u32::MAX - 10, remove_after_ms: 300 };
        let schedule = FlashSchedule::new(&config);
        assert!(schedule.remove_at >= schedule.fade_at);
        assert_eq!(schedule.remove_delay(), 10);
    }
}
