//! Loading splash shown for a fixed time after mount.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::BRAND;

/// One-way splash lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplashState {
    #[default]
    Showing,
    Revealed,
}

impl SplashState {
    pub fn is_showing(self) -> bool {
        self == SplashState::Showing
    }

    /// Move to [`SplashState::Revealed`]. Returns `true` only on the call that
    /// actually changed the state.
    pub fn reveal(&mut self) -> bool {
        match self {
            SplashState::Showing => {
                *self = SplashState::Revealed;
                true
            }
            SplashState::Revealed => false,
        }
    }
}

/// Arm the splash timer for the current component.
///
/// The returned signal is `true` until `delay` has passed.
pub fn use_loading_splash(delay: Duration) -> Signal<bool> {
    let state = RwSignal::new(SplashState::Showing);
    arm_splash_timer(state, delay);
    Signal::derive(move || state.get().is_showing())
}

/// Reveal `state` once `delay` has passed. The timer is cleared if the
/// current owner is cleaned up first, so an early unmount never touches the
/// state.
pub fn arm_splash_timer(state: RwSignal<SplashState>, delay: Duration) {
    let reveal = move || {
        state.update(|s| {
            if s.reveal() {
                tracing::info!("splash revealed");
            }
        });
    };

    match set_timeout_with_handle(reveal, delay) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            tracing::warn!("splash timer unavailable, revealing now: {:?}", err);
            reveal();
        }
    }
}

#[component]
pub fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="splash" role="status" aria-live="polite">
            <div class="splash-inner">
                <div class="splash-mark">
                    <div class="splash-mark-core"></div>
                </div>
                <h1 class="splash-title">{BRAND}</h1>
                <p class="splash-tagline">"Initializing next-generation infrastructure..."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_showing() {
        assert!(SplashState::default().is_showing());
    }

    #[test]
    fn reveals_exactly_once() {
        let mut state = SplashState::Showing;
        assert!(state.reveal());
        assert!(!state.is_showing());
        assert!(!state.reveal());
        assert!(!state.reveal());
        assert_eq!(state, SplashState::Revealed);
    }

    #[test]
    fn never_reverts() {
        let mut state = SplashState::Revealed;
        state.reveal();
        assert!(!state.is_showing());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use leptos::reactive::owner::Owner;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::testing::sleep;

    #[wasm_bindgen_test]
    async fn timer_reveals_after_delay() {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(SplashState::Showing));
        owner.with(|| arm_splash_timer(state, Duration::from_millis(30)));

        assert!(state.get_untracked().is_showing());
        sleep(90).await;
        assert_eq!(state.get_untracked(), SplashState::Revealed);
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn cleanup_before_delay_leaves_state_alone() {
        let root = Owner::new();
        let state = root.with(|| RwSignal::new(SplashState::Showing));
        let splash = root.child();
        splash.with(|| arm_splash_timer(state, Duration::from_millis(30)));

        splash.cleanup();
        sleep(90).await;
        assert_eq!(state.get_untracked(), SplashState::Showing);
        root.cleanup();
    }
}
