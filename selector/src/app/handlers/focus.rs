//! # Focus and Visibility Handlers

use tokio::time::Instant;

use crate::app::{handlers, CurrencySelect};
use crate::core::navigation::Route;
use crate::visibility::FocusChange;

/// Record a focus transition of the selection screen.
///
/// Outside discovery sessions the composer's gesture lock follows focus, and
/// losing focus flushes favorites and hands focus back to the composer.
pub(crate) fn set_focused(app: &CurrencySelect, focused: bool) {
    let (change, from_discover) = {
        let mut state = app.state.write();
        let change = state.visibility.set_focused(focused, Instant::now());
        (change, state.params.from_discover)
    };

    let Some(change) = change else {
        return;
    };
    tracing::debug!(?change, from_discover, "Selection screen focus changed");

    if from_discover {
        return;
    }

    app.services.host.set_gesture_enabled(!focused);
    if change == FocusChange::Lost {
        handlers::favorites::start_flush(app);
        app.services.host.restore_focus();
    }
}

/// End the transition once the settle delay has passed.
pub(crate) fn poll_settle(app: &CurrencySelect, now: Instant) {
    if app.state.write().visibility.poll(now) {
        tracing::debug!("Transition settled");
    }
}

/// The user backed out of the network-scoped view.
pub(crate) fn handle_back_button(app: &CurrencySelect) {
    handlers::search::set_search_query(app, "");

    let original = {
        let mut state = app.state.write();
        state.visibility.begin_transition();
        state.original_chain_id
    };
    handlers::search::set_active_chain(app, original);
}

pub(crate) fn is_list_visible(app: &CurrencySelect) -> bool {
    let viewing_explainer = app.services.navigator.active_route() == Some(Route::ExplainSheet);
    app.state.read().visibility.is_list_visible(viewing_explainer)
}
