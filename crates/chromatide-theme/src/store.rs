// ABOUTME: Shared theme state with subscriber callbacks and system-appearance resolution
// ABOUTME: Constructed explicitly and passed around; there is no global instance

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use chromatide_logging::{debug, info, warn};
use chromatide_types::ThemeMode;

use crate::theme::Theme;
use crate::tokens::{ColorTokens, RadiusTokens, ShadowTokens, SpaceTokens, TypographyTokens};

/// Whether the active theme was chosen explicitly or tracks the host
/// appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Manual,
    FollowSystem,
}

/// Handle returned by [`ThemeStore::subscribe`]; pass it back to
/// [`ThemeStore::unsubscribe`] to stop receiving change callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type ThemeListener = Arc<dyn Fn(&Theme) + Send + Sync>;

struct StoreState {
    current: Theme,
    themes: HashMap<String, Theme>,
    preference: ThemePreference,
}

struct ListenerSet {
    next_id: u64,
    entries: Vec<(SubscriptionId, ThemeListener)>,
}

/// Thread-safe holder of the active theme and the registered theme catalog.
///
/// Listeners run synchronously on the thread that changes the theme, after
/// every store lock is released, so a callback may freely call back into the
/// store, including subscribe and unsubscribe.
pub struct ThemeStore {
    state: RwLock<StoreState>,
    listeners: RwLock<ListenerSet>,
}

impl ThemeStore {
    /// Create a store with `initial` active and registered. The built-in
    /// light and dark themes are registered as well so system resolution
    /// always has a target.
    pub fn new(initial: Theme) -> Self {
        let mut themes = HashMap::new();
        for theme in [Theme::light(), Theme::dark()] {
            themes.insert(theme.id.clone(), theme);
        }
        themes.insert(initial.id.clone(), initial.clone());

        info!(theme_id = %initial.id, "theme store initialized");
        Self {
            state: RwLock::new(StoreState {
                current: initial,
                themes,
                preference: ThemePreference::Manual,
            }),
            listeners: RwLock::new(ListenerSet {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    /// Snapshot of the active theme.
    pub fn current(&self) -> Theme {
        self.state.read().current.clone()
    }

    pub fn preference(&self) -> ThemePreference {
        self.state.read().preference
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        debug!(?preference, "theme preference changed");
        self.state.write().preference = preference;
    }

    /// Register a theme so it can be activated by id later. Re-registering
    /// an id replaces the earlier entry.
    pub fn register_theme(&self, theme: Theme) {
        debug!(theme_id = %theme.id, "theme registered");
        self.state.write().themes.insert(theme.id.clone(), theme);
    }

    /// Remove a registered theme. The active theme cannot be removed.
    pub fn remove_theme(&self, id: &str) -> bool {
        let mut state = self.state.write();
        if state.current.id == id {
            warn!(theme_id = %id, "refusing to remove the active theme");
            return false;
        }
        state.themes.remove(id).is_some()
    }

    pub fn registered_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.state.read().themes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Make `theme` active, register it, and mark the preference manual.
    /// Listeners are notified unless the theme is already active.
    pub fn set_theme(&self, theme: Theme) {
        {
            let mut state = self.state.write();
            if state.current.id == theme.id {
                return;
            }
            info!(from = %state.current.id, to = %theme.id, "theme changed");
            state.themes.insert(theme.id.clone(), theme.clone());
            state.current = theme.clone();
            state.preference = ThemePreference::Manual;
        }
        self.notify(&theme);
    }

    /// Activate a registered theme by id. Returns false when the id is
    /// unknown, leaving the current theme in place.
    pub fn switch_theme(&self, id: &str) -> bool {
        let theme = {
            let state = self.state.read();
            match state.themes.get(id) {
                Some(theme) => theme.clone(),
                None => {
                    warn!(theme_id = %id, "switch requested for unknown theme");
                    return false;
                }
            }
        };
        self.set_theme(theme);
        true
    }

    /// Apply the host appearance. Only acts when the preference is
    /// [`ThemePreference::FollowSystem`]; activating keeps that preference.
    pub fn resolve_system(&self, mode: ThemeMode) {
        let theme = {
            let state = self.state.read();
            if state.preference != ThemePreference::FollowSystem {
                return;
            }
            let id = mode.as_str();
            match state.themes.get(id) {
                Some(theme) => theme.clone(),
                None => Theme::for_mode(mode),
            }
        };

        let changed = {
            let mut state = self.state.write();
            if state.current.id == theme.id {
                false
            } else {
                info!(mode = %mode, theme_id = %theme.id, "following system appearance");
                state.current = theme.clone();
                true
            }
        };
        if changed {
            self.notify(&theme);
        }
    }

    /// Register a change callback, invoked with the new theme after every
    /// activation. The callback does not fire for the current theme.
    pub fn subscribe(&self, listener: impl Fn(&Theme) + Send + Sync + 'static) -> SubscriptionId {
        let mut listeners = self.listeners.write();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Drop a previously registered callback. Returns false for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    fn notify(&self, theme: &Theme) {
        // Snapshot the listener set and release the lock before invoking,
        // so a callback can subscribe or unsubscribe without deadlocking.
        let snapshot: Vec<ThemeListener> = {
            let listeners = self.listeners.read();
            listeners
                .entries
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };
        for listener in snapshot {
            listener(theme);
        }
    }

    // Convenience accessors mirroring the token categories.

    pub fn colors(&self) -> ColorTokens {
        self.state.read().current.tokens.color
    }

    pub fn space(&self) -> SpaceTokens {
        self.state.read().current.tokens.space
    }

    pub fn radius(&self) -> RadiusTokens {
        self.state.read().current.tokens.radius
    }

    pub fn typography(&self) -> TypographyTokens {
        self.state.read().current.tokens.typography.clone()
    }

    pub fn shadows(&self) -> ShadowTokens {
        self.state.read().current.tokens.shadows
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::light())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn starts_with_the_initial_theme() {
        let store = ThemeStore::new(Theme::dark());
        assert_eq!(store.current().id, "dark");
        assert_eq!(store.preference(), ThemePreference::Manual);
    }

    #[test]
    fn set_theme_notifies_subscribers() {
        let store = ThemeStore::new(Theme::light());
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_listener = Arc::clone(&seen);
        store.subscribe(move |theme| {
            assert_eq!(theme.id, "dark");
            seen_by_listener.fetch_add(1, Ordering::SeqCst);
        });

        store.set_theme(Theme::dark());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(store.current().id, "dark");
    }

    #[test]
    fn setting_the_active_theme_again_is_silent() {
        let store = ThemeStore::new(Theme::light());
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_listener = Arc::clone(&seen);
        store.subscribe(move |_| {
            seen_by_listener.fetch_add(1, Ordering::SeqCst);
        });

        store.set_theme(Theme::light());
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_stops_callbacks() {
        let store = ThemeStore::new(Theme::light());
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_listener = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            seen_by_listener.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store.set_theme(Theme::dark());
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listeners_may_unsubscribe_themselves() {
        let store = Arc::new(ThemeStore::new(Theme::light()));
        let seen = Arc::new(AtomicUsize::new(0));
        let own_id = Arc::new(parking_lot::Mutex::new(None::<SubscriptionId>));

        let store_in_listener = Arc::clone(&store);
        let seen_in_listener = Arc::clone(&seen);
        let own_id_in_listener = Arc::clone(&own_id);
        let id = store.subscribe(move |_| {
            seen_in_listener.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *own_id_in_listener.lock() {
                // Re-entrant call; must not block on the listener set.
                assert!(store_in_listener.unsubscribe(id));
            }
        });
        *own_id.lock() = Some(id);

        store.set_theme(Theme::dark());
        store.set_theme(Theme::light());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listeners_may_subscribe_more_listeners() {
        let store = Arc::new(ThemeStore::new(Theme::light()));
        let late_calls = Arc::new(AtomicUsize::new(0));

        let store_in_listener = Arc::clone(&store);
        let late_calls_for_new = Arc::clone(&late_calls);
        store.subscribe(move |_| {
            let late_calls_inner = Arc::clone(&late_calls_for_new);
            store_in_listener.subscribe(move |_| {
                late_calls_inner.fetch_add(1, Ordering::SeqCst);
            });
        });

        // The listener added during this notification only sees later ones.
        store.set_theme(Theme::dark());
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        store.set_theme(Theme::light());
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn switch_theme_by_id() {
        let store = ThemeStore::new(Theme::light());
        assert!(store.switch_theme("dark"));
        assert_eq!(store.current().id, "dark");

        assert!(!store.switch_theme("sepia"));
        assert_eq!(store.current().id, "dark");
    }

    #[test]
    fn registered_themes_are_switchable() {
        let store = ThemeStore::new(Theme::light());
        store.register_theme(Theme::dark_branded("#7B2FBE"));

        assert!(store.switch_theme("dark-7b2fbe"));
        assert_eq!(store.current().id, "dark-7b2fbe");
        assert!(store.registered_ids().contains(&"dark-7b2fbe".to_string()));
    }

    #[test]
    fn active_theme_cannot_be_removed() {
        let store = ThemeStore::new(Theme::light());
        assert!(!store.remove_theme("light"));
        assert!(store.remove_theme("dark"));
        assert!(!store.remove_theme("dark"));
    }

    #[test]
    fn manual_selection_overrides_preference() {
        let store = ThemeStore::new(Theme::light());
        store.set_preference(ThemePreference::FollowSystem);
        store.set_theme(Theme::dark());
        assert_eq!(store.preference(), ThemePreference::Manual);
    }

    #[test]
    fn system_resolution_requires_follow_preference() {
        let store = ThemeStore::new(Theme::light());

        // Manual preference: system changes are ignored.
        store.resolve_system(ThemeMode::Dark);
        assert_eq!(store.current().id, "light");

        store.set_preference(ThemePreference::FollowSystem);
        store.resolve_system(ThemeMode::Dark);
        assert_eq!(store.current().id, "dark");
        // Following the system does not flip the preference back to manual.
        assert_eq!(store.preference(), ThemePreference::FollowSystem);

        store.resolve_system(ThemeMode::Light);
        assert_eq!(store.current().id, "light");
    }

    #[test]
    fn token_accessors_track_the_active_theme() {
        let store = ThemeStore::new(Theme::light());
        let light_text = store.colors().text_primary;

        store.set_theme(Theme::dark());
        assert_ne!(store.colors().text_primary, light_text);
        assert_eq!(store.space().space_16, 16.0);
        assert!((store.shadows().small.color.a - 0.3).abs() < 1e-6);
    }

    #[test]
    fn store_is_shareable_across_threads() {
        let store = Arc::new(ThemeStore::new(Theme::light()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        store.switch_theme("dark");
                    } else {
                        store.switch_theme("light");
                    }
                    store.colors();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(["light", "dark"].contains(&store.current().id.as_str()));
    }
}
