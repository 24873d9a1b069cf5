//! Client-side hero search: the text filter and the debounce coalescer.

use std::time::Duration;
use tokio::time::Instant;

use crate::presentation::HeroListItem;

/// Whether `hero` matches an already lower-cased, non-empty query.
///
/// Matches name, full name, or publisher (only when present), by
/// case-insensitive substring.
fn matches_lowercase(hero: &HeroListItem, query: &str) -> bool {
    hero.name.to_lowercase().contains(query)
        || hero.full_name.to_lowercase().contains(query)
        || hero
            .publisher
            .as_ref()
            .is_some_and(|publisher| publisher.to_lowercase().contains(query))
}

/// Whether `hero` matches `query`. An empty query matches everything.
pub fn matches(hero: &HeroListItem, query: &str) -> bool {
    query.is_empty() || matches_lowercase(hero, &query.to_lowercase())
}

/// Heroes matching `query`, in source order. An empty query yields all of
/// them.
pub fn filter_heroes(heroes: &[HeroListItem], query: &str) -> Vec<HeroListItem> {
    if query.is_empty() {
        return heroes.to_vec();
    }

    let query = query.to_lowercase();
    heroes
        .iter()
        .filter(|hero| matches_lowercase(hero, &query))
        .cloned()
        .collect()
}

/// Coalesces rapid inputs into one settled value.
///
/// Every [`push`](Self::push) restarts the quiet window. Once the window
/// elapses, [`poll`](Self::poll) releases the latest value unless it equals
/// the last value released.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
    last_applied: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_applied: None,
        }
    }

    /// Start with `value` already considered applied.
    pub fn with_applied(window: Duration, value: T) -> Self {
        Self {
            window,
            pending: None,
            last_applied: Some(value),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record an input at `now`, replacing any pending one.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// When the pending value settles, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Release the pending value if its window has elapsed by `now` and it
    /// differs from the last released value.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {}
            _ => return None,
        }

        let (value, _) = self.pending.take()?;
        if self.last_applied.as_ref() == Some(&value) {
            return None;
        }

        self.last_applied = Some(value.clone());
        Some(value)
    }

    /// Drop any pending value and treat `value` as applied, bypassing the
    /// window.
    pub fn apply_now(&mut self, value: T) {
        self.pending = None;
        self.mark_applied(value);
    }

    /// Record what was actually applied downstream, leaving any pending
    /// value in place.
    pub fn mark_applied(&mut self, value: T) {
        self.last_applied = Some(value);
    }

    pub fn last_applied(&self) -> Option<&T> {
        self.last_applied.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn catalogue() -> Vec<HeroListItem> {
        [
            fixtures::hero_record_with(69, "Batgirl", "Barbara Gordon", Some("DC Comics")),
            fixtures::hero_record_with(70, "Batman", "Bruce Wayne", Some("DC Comics")),
            fixtures::hero_record_with(346, "Iron Man", "Tony Stark", Some("Marvel Comics")),
            fixtures::hero_record_with(999, "Nameless", "Unknown", None),
        ]
        .iter()
        .map(HeroListItem::from)
        .collect()
    }

    fn names(heroes: &[HeroListItem]) -> Vec<&str> {
        heroes.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let heroes = catalogue();
        assert_eq!(names(&filter_heroes(&heroes, "bat")), vec!["Batgirl", "Batman"]);
        assert_eq!(names(&filter_heroes(&heroes, "BATMAN")), vec!["Batman"]);
    }

    #[test]
    fn test_filter_matches_full_name() {
        let heroes = catalogue();
        assert_eq!(names(&filter_heroes(&heroes, "stark")), vec!["Iron Man"]);
    }

    #[test]
    fn test_filter_matches_publisher_when_present() {
        let heroes = catalogue();
        assert_eq!(
            names(&filter_heroes(&heroes, "dc comics")),
            vec!["Batgirl", "Batman"]
        );
        assert_eq!(names(&filter_heroes(&heroes, "marvel")), vec!["Iron Man"]);
    }

    #[test]
    fn test_filter_empty_query_returns_everything() {
        let heroes = catalogue();
        assert_eq!(filter_heroes(&heroes, ""), heroes);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_heroes(&catalogue(), "xyzzy").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_and_leaves_source_untouched() {
        let heroes = catalogue();
        let first = filter_heroes(&heroes, "man");
        let second = filter_heroes(&heroes, "man");

        assert_eq!(first, second);
        assert_eq!(heroes, catalogue());
    }

    #[test]
    fn test_matches_single_hero() {
        let heroes = catalogue();
        assert!(matches(&heroes[1], "wAyNe"));
        assert!(matches(&heroes[3], ""));
        assert!(!matches(&heroes[3], "comics"));
    }

    #[test]
    fn test_debouncer_waits_for_quiet_window() {
        let start = Instant::now();
        let window = Duration::from_millis(300);
        let mut debouncer = Debouncer::new(window);

        debouncer.push("b".to_string(), start);
        debouncer.push("ba".to_string(), start + Duration::from_millis(100));
        debouncer.push("bat".to_string(), start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(500))
        );
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("bat".to_string())
        );
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_debouncer_drops_duplicate_of_last_applied() {
        let start = Instant::now();
        let window = Duration::from_millis(300);
        let mut debouncer = Debouncer::new(window);

        debouncer.push("bat".to_string(), start);
        assert_eq!(debouncer.poll(start + window), Some("bat".to_string()));

        // Typed "batm" then erased back to "bat" inside one window.
        let later = start + Duration::from_secs(1);
        debouncer.push("batm".to_string(), later);
        debouncer.push("bat".to_string(), later + Duration::from_millis(50));

        assert_eq!(debouncer.poll(later + Duration::from_secs(1)), None);
        assert_eq!(debouncer.last_applied(), Some(&"bat".to_string()));
    }

    #[test]
    fn test_debouncer_apply_now_cancels_pending() {
        let start = Instant::now();
        let window = Duration::from_millis(300);
        let mut debouncer = Debouncer::with_applied(window, String::new());

        debouncer.push("bat".to_string(), start);
        debouncer.apply_now(String::new());

        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(start + window), None);
        assert_eq!(debouncer.last_applied(), Some(&String::new()));
    }
}
