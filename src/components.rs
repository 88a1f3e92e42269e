//! Pure Yew view components for the trainer UI.
//!
//! Components render from props only; state lives in the `use_trainer` hook.

use log::warn;
use punch_combo::config::{INTERVAL_LABEL, STRIKE_MODE_LABEL};
use punch_combo::utils::{countdown_message, parse_combo_duration};
use punch_combo::{Combination, ComboDuration};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Renders the current combination, one styled entry per move.
#[derive(Properties, PartialEq)]
pub struct ComboDisplayProps {
    pub combination: Combination,
}

#[function_component(ComboDisplay)]
pub fn combo_display(props: &ComboDisplayProps) -> Html {
    html! {
        <div class="combination">
            { props.combination.iter().enumerate().map(|(i, m)| {
                html! {
                    <span key={i.to_string()} class={m.classify().css_class()}>
                        { m.describe() }
                    </span>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Checkbox switching Muay Thai strikes on and off.
#[derive(Properties, PartialEq)]
pub struct StrikeModeToggleProps {
    pub enabled: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(StrikeModeToggle)]
pub fn strike_mode_toggle(props: &StrikeModeToggleProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <div class="toggle-container">
            <label class="toggle-label">
                <span class="toggle-text">{ STRIKE_MODE_LABEL }</span>
                <input type="checkbox"
                    class="toggle-input"
                    checked={props.enabled}
                    {onchange}
                />
                <span class="toggle-slider"></span>
            </label>
        </div>
    }
}

/// Select for the time between combinations.
#[derive(Properties, PartialEq)]
pub struct IntervalSelectProps {
    pub selected: ComboDuration,
    pub on_select: Callback<ComboDuration>,
}

#[function_component(IntervalSelect)]
pub fn interval_select(props: &IntervalSelectProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_combo_duration(&select.value()) {
                Ok(interval) => on_select.emit(interval),
                Err(err) => warn!("Ignoring interval selection: {}", err),
            }
        })
    };

    html! {
        <label class="duration-label">
            <span class="toggle-text">{ INTERVAL_LABEL }</span>
            <select class="duration-select" {onchange}>
                { for ComboDuration::all().map(|d| html! {
                    <option value={d.seconds().to_string()} selected={d == props.selected}>
                        { d.to_string() }
                    </option>
                }) }
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownNoticeProps {
    pub remaining: u32,
}

#[function_component(CountdownNotice)]
pub fn countdown_notice(props: &CountdownNoticeProps) -> Html {
    html! {
        <p class="countdown">{ countdown_message(props.remaining) }</p>
    }
}
