use crate::settings::intent::ConfirmIntent;
use crate::settings::state::ConfirmState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open {
                pending,
                revert_to,
                countdown_seconds,
            } => match state {
                ConfirmState::Idle => ConfirmState::AwaitingConfirmation {
                    pending,
                    revert_to,
                    remaining: i32::try_from(countdown_seconds).unwrap_or(i32::MAX),
                },
                // A popup is already showing: the first selection keeps it.
                open => open,
            },
            ConfirmIntent::Tick => match state {
                ConfirmState::AwaitingConfirmation {
                    pending,
                    revert_to,
                    remaining,
                } => ConfirmState::AwaitingConfirmation {
                    pending,
                    revert_to,
                    remaining: remaining - 1,
                },
                other => other,
            },
            ConfirmIntent::Hold => match state {
                ConfirmState::AwaitingConfirmation {
                    pending,
                    revert_to,
                    remaining,
                } => ConfirmState::AwaitingConfirmation {
                    pending,
                    revert_to,
                    remaining: remaining.max(0),
                },
                other => other,
            },
            ConfirmIntent::Close => ConfirmState::Idle,
        }
    }
}
