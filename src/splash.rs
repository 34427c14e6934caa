use std::time::Duration;

pub const DEFAULT_SPLASH: Duration = Duration::from_millis(2000);
/// Replay length when the drawer logo is tapped.
pub const DRAWER_SPLASH: Duration = Duration::from_millis(1000);

/// Replay length for the navbar logo, shorter on phones.
pub fn logo_splash(mobile: bool) -> Duration {
    if mobile {
        Duration::from_millis(1200)
    } else {
        Duration::from_millis(5200)
    }
}

/// Full-screen splash overlay.
///
/// Each [`Splash::show_for`] hands out a ticket; only the newest ticket may
/// hide the overlay, so re-showing while a timer is pending extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splash {
    visible: bool,
    generation: u64,
    load_seen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    pub generation: u64,
    pub after: Duration,
}

impl Default for Splash {
    fn default() -> Self {
        // visible from the first paint until the load timer fires
        Self {
            visible: true,
            generation: 0,
            load_seen: false,
        }
    }
}

impl Splash {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show_for(&mut self, duration: Duration) -> HideTicket {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        HideTicket {
            generation: self.generation,
            after: duration,
        }
    }

    /// Page finished loading; starts the first-paint countdown. Only the first
    /// report counts, so a `load` event racing a `readyState` check is fine.
    pub fn page_loaded(&mut self) -> Option<HideTicket> {
        if std::mem::replace(&mut self.load_seen, true) {
            return None;
        }
        Some(self.show_for(DEFAULT_SPLASH))
    }

    /// Returns whether the ticket was still current.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut splash = Splash::default();
        assert!(splash.is_visible());
        let ticket = splash.show_for(DEFAULT_SPLASH);
        assert_eq!(ticket.after, Duration::from_millis(2000));
        assert!(splash.expire(ticket));
        assert!(!splash.is_visible());
    }

    #[test]
    fn test_reshow_outlives_old_timer() {
        let mut splash = Splash::default();
        let first = splash.show_for(DEFAULT_SPLASH);
        assert!(splash.expire(first));

        let old = splash.show_for(Duration::from_millis(5200));
        let new = splash.show_for(Duration::from_millis(1000));
        assert!(!splash.expire(old));
        assert!(splash.is_visible());
        assert!(splash.expire(new));
        assert!(!splash.is_visible());
    }

    #[test]
    fn test_countdown_starts_once_on_load() {
        let mut splash = Splash::default();
        let ticket = splash.page_loaded().unwrap();
        assert_eq!(ticket.after, DEFAULT_SPLASH);
        assert_eq!(splash.page_loaded(), None);
        assert!(splash.is_visible());
        assert!(splash.expire(ticket));
        assert!(!splash.is_visible());
    }

    #[test]
    fn test_replay_before_load_outlives_load_timer() {
        let mut splash = Splash::default();
        let replay = splash.show_for(logo_splash(false));
        let load = splash.page_loaded().unwrap();
        assert!(!splash.expire(replay));
        assert!(splash.expire(load));
    }

    #[test]
    fn test_logo_durations() {
        assert_eq!(logo_splash(false), Duration::from_millis(5200));
        assert_eq!(logo_splash(true), Duration::from_millis(1200));
        assert!(DRAWER_SPLASH < logo_splash(true));
    }
}
