use log::info;
use punch_combo::settings::{LocalStorageStore, StrikeModePreference};
use punch_combo::state::{TrainerAction, TrainerState};
use punch_combo::timers::{BrowserSchedule, TrainerTimers};
use punch_combo::{ComboDuration, TrainerSettings};
use yew::prelude::*;

/// Holds the trainer state and the callbacks the controls emit into.
#[derive(Clone)]
pub struct Trainer {
    /// Current settings, combination and countdown.
    pub state: UseReducerHandle<TrainerState>,
    /// Persists the strike mode flag and applies it.
    pub on_strike_mode: Callback<bool>,
    /// Switches to a new combination interval.
    pub on_interval: Callback<ComboDuration>,
}

/// Custom hook owning the trainer: state, persisted strike mode and both timers.
#[hook]
pub fn use_trainer() -> Trainer {
    let preference = use_memo((), |_| StrikeModePreference::new(LocalStorageStore));

    let state = {
        let preference = preference.clone();
        use_reducer(move || {
            TrainerState::new(TrainerSettings::new(
                preference.load(),
                ComboDuration::default(),
            ))
        })
    };

    // Any settings change tears down both timers, shows a fresh combination
    // and starts the pair again.
    {
        let dispatcher = state.dispatcher();
        let deps = (state.settings.include_strikes, state.settings.interval);
        use_effect_with(deps, move |&(include_strikes, interval)| {
            info!(
                "Starting trainer (strikes: {}, interval: {})",
                include_strikes, interval
            );
            dispatcher.dispatch(TrainerAction::Regenerate);

            let rotate = dispatcher.clone();
            let tick = dispatcher;
            let mut timers = TrainerTimers::new();
            timers.restart(
                &BrowserSchedule,
                interval,
                move || rotate.dispatch(TrainerAction::Regenerate),
                move || tick.dispatch(TrainerAction::Tick),
            );
            move || timers.stop()
        });
    }

    let on_strike_mode = {
        let dispatcher = state.dispatcher();
        Callback::from(move |enabled: bool| {
            preference.save(enabled);
            dispatcher.dispatch(TrainerAction::SetStrikeMode(enabled));
        })
    };

    let on_interval = {
        let dispatcher = state.dispatcher();
        Callback::from(move |interval: ComboDuration| {
            dispatcher.dispatch(TrainerAction::SetInterval(interval));
        })
    };

    Trainer {
        state,
        on_strike_mode,
        on_interval,
    }
}
