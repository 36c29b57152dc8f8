//! Shared scroll-reveal controller.
//!
//! Every section used to need its own observer + timeout plumbing; this is
//! the one reusable version, parameterized by a [`RevealPlan`]. Each call
//! owns an independent [`RevealState`], so sections reveal independently.

use std::time::Duration;

use leptos::html;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{RevealPlan, RevealState};

/// Handle to one section's reveal state.
#[derive(Clone, Copy)]
pub struct SectionReveal {
    visible: ReadSignal<bool>,
    stages: ReadSignal<RevealState>,
}

impl SectionReveal {
    /// True once the section has intersected the viewport at least once.
    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    pub fn shown(&self, token: &str) -> bool {
        self.stages.with(|s| s.contains(token))
    }

    /// Entrance transition classes for a staged element.
    pub fn stage_class(&self, token: &str) -> &'static str {
        if self.shown(token) {
            "translate-y-0 opacity-100"
        } else {
            "translate-y-8 opacity-0"
        }
    }

    /// Variant with a scale pop, for card-like elements.
    pub fn pop_class(&self, token: &str) -> &'static str {
        if self.shown(token) {
            "translate-y-0 opacity-100 scale-100"
        } else {
            "translate-y-8 opacity-0 scale-95"
        }
    }
}

/// Watches `target` and, on its first entry into the viewport, schedules the
/// plan's stage activations. Later intersection events are no-ops, pending
/// timeouts are cancelled on teardown, and a stage whose timer cannot be
/// scheduled is activated immediately so content is never stuck hidden.
pub fn use_section_reveal(target: NodeRef<html::Section>, plan: RevealPlan) -> SectionReveal {
    let (visible, set_visible) = signal(false);
    let (stages, set_stages) = signal(RevealState::new());
    let pending = StoredValue::new(Vec::<TimeoutHandle>::new());

    let options = UseIntersectionObserverOptions::default()
        .thresholds(vec![plan.threshold()])
        .root_margin(plan.margin());
    // taken on the first intersection; `None` afterwards makes re-entry a no-op
    let armed = StoredValue::new(Some(plan));

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            let Some(plan) = armed.try_update_value(|p| p.take()).flatten() else {
                return;
            };
            set_visible(true);
            for (token, delay) in plan.stages() {
                let token = token.to_string();
                let scheduled = set_timeout_with_handle(
                    {
                        let token = token.clone();
                        move || {
                            let _ = set_stages.try_update(|s| s.activate(&token));
                        }
                    },
                    Duration::from_millis(delay),
                );
                match scheduled {
                    Ok(handle) => pending.update_value(|v| v.push(handle)),
                    Err(_) => set_stages.update(|s| s.activate(&token)),
                }
            }
        },
        options,
    );

    on_cleanup(move || {
        pending.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.clear();
            }
        });
    });

    SectionReveal { visible, stages }
}
