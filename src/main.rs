//! Main module for the punch combination trainer using Yew.
//! Wires the trainer hook into the view components.

use yew::prelude::*;

mod components;
mod hooks;

use components::{ComboDisplay, CountdownNotice, IntervalSelect, StrikeModeToggle};
use hooks::use_trainer;

/// Primary application component.
#[function_component(Main)]
fn main_component() -> Html {
    let trainer = use_trainer();
    let settings = trainer.state.settings;

    html! {
        <div class="container">
            <h1 class="title">{ "Punch Combination Trainer" }</h1>
            <div class="controls-container">
                <StrikeModeToggle
                    enabled={settings.include_strikes}
                    on_toggle={trainer.on_strike_mode.clone()}
                />
                <IntervalSelect
                    selected={settings.interval}
                    on_select={trainer.on_interval.clone()}
                />
            </div>
            <ComboDisplay combination={trainer.state.combination.clone()} />
            <CountdownNotice remaining={trainer.state.countdown.remaining()} />
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Punch combination trainer starting");
    yew::Renderer::<Main>::new().render();
}
