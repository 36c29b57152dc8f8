use leptos::prelude::*;
use leptos_use::utils::Pausable;
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};

use crate::content::Stats;
use crate::motion::Counter;

/// How a finished stat is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatStyle {
    /// `$4.0M+` style dollar figure.
    Sales,
    /// `500+` style plain count.
    Count,
}

/// A single stat animated from 0 to `target` once `start` flips true.
///
/// The raf loop stays paused until then, so off-screen counters cost
/// nothing; once the model reports done the loop is paused again and the
/// exact target stays on screen.
#[component]
pub fn StatCounter(
    target: u64,
    style: StatStyle,
    #[prop(into)] start: Signal<bool>,
    label: &'static str,
    #[prop(default = "text-cyan")] accent: &'static str,
) -> impl IntoView {
    let (shown, set_shown) = signal(0u64);
    let (done, set_done) = signal(false);
    let counter = StoredValue::new(Counter::new(target));

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let value = counter
                .try_update_value(|c| c.advance(args.delta))
                .unwrap_or(target);
            let _ = set_shown.try_set(value);
            if counter.try_with_value(|c| c.is_done()).unwrap_or(true) {
                let _ = set_done.try_set(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if done() {
            pause();
        } else if start() {
            resume();
        }
    });

    let display = move || match style {
        StatStyle::Sales => Stats::sales_display(shown()),
        StatStyle::Count => Stats::count_display(shown()),
    };

    view! {
        <div class="text-center">
            <div class=format!("text-3xl md:text-4xl font-bold {accent}")>{display}</div>
            <div class="text-sm text-muted mt-1">{label}</div>
        </div>
    }
}
