use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use wasm_bindgen::JsValue;

use crate::reveal::{
    crosses_reveal_threshold, stagger_delay, RevealError, RevealSet, REVEAL_THRESHOLD,
};

/// Watches `targets` for viewport intersection and accumulates the positions
/// that have come into view. Each target is registered under its index in
/// the list, so the Nth ref always reports as N no matter when it fires.
///
/// With `stagger` set, an index is inserted `index * step` after its
/// intersection fires instead of immediately, cascading the reveals.
///
/// The returned signal only ever grows. Cards derive their transition
/// classes from membership, so scrolling an element back out of view never
/// undoes its reveal. Observation stops when the calling scope is disposed.
pub fn use_reveal(
    targets: Vec<NodeRef<html::Div>>,
    stagger: Option<Duration>,
) -> ReadSignal<RevealSet> {
    let count = targets.len();
    let (revealed, set_revealed) = signal(RevealSet::new());

    // Runs on the client only; server-rendered HTML always starts unrevealed.
    Effect::new(move |_| {
        if let Err(err) = ensure_observer_support() {
            log::warn!("{err}; showing all {count} cards up front");
            set_revealed.set(RevealSet::saturated(count));
        }
    });

    for (index, target) in targets.into_iter().enumerate() {
        use_intersection_observer_with_options(
            target,
            move |entries, _observer| {
                // The observer also delivers an initial report and the
                // downward crossing; only a ratio at or past the threshold
                // counts as seen.
                let crossed = entries.iter().any(|entry| {
                    entry.is_intersecting() && crosses_reveal_threshold(entry.intersection_ratio())
                });
                if !crossed {
                    return;
                }
                match stagger {
                    None => {
                        set_revealed.update(|set| {
                            set.insert(index);
                        });
                    }
                    Some(step) => {
                        set_timeout(
                            move || {
                                // The section may be unmounted before a
                                // pending timer fires; a disposed signal is
                                // skipped rather than written.
                                let _ = set_revealed.try_update(|set| set.insert(index));
                            },
                            stagger_delay(index, step),
                        );
                    }
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
        );
    }

    revealed
}

fn ensure_observer_support() -> Result<(), RevealError> {
    let supported = web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false);
    if supported {
        Ok(())
    } else {
        Err(RevealError::ObserverUnsupported)
    }
}
