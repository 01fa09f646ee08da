use std::ops::Deref;
use std::rc::Rc;

use arcade_common::{fetch_activities, ActivitySource, ActivityTracker, TrackerEvent, UserId};
use yew::prelude::*;

/// Activity tracker living in a reducer, so the fetch guard and the
/// fetched data change together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityState(ActivityTracker);

impl Deref for ActivityState {
    type Target = ActivityTracker;

    fn deref(&self) -> &ActivityTracker {
        &self.0
    }
}

impl Reducible for ActivityState {
    type Action = TrackerEvent;

    fn reduce(self: Rc<Self>, event: TrackerEvent) -> Rc<Self> {
        let mut tracker = self.0.clone();
        tracker.apply(event);
        Rc::new(ActivityState(tracker))
    }
}

/// Loads the activities of `identity`, once per distinct identity.
///
/// Renders triggered by anything else do not refetch. A response that
/// arrives after a newer request was issued is ignored by the tracker.
#[hook]
pub fn use_user_activities(
    source: Rc<dyn ActivitySource>,
    identity: Option<UserId>,
) -> UseReducerHandle<ActivityState> {
    let state = use_reducer(ActivityState::default);

    {
        let state = state.clone();
        use_effect_with(identity, move |identity| {
            let dispatcher = state.dispatcher();
            let pending = fetch_activities(&state, source, identity.as_ref(), move |event| {
                if let TrackerEvent::Finished(_, Err(err)) = &event {
                    log::error!("Error fetching activities: {}", err);
                }
                dispatcher.dispatch(event);
            });
            if let Some(pending) = pending {
                wasm_bindgen_futures::spawn_local(pending);
            }
            || ()
        });
    }

    state
}
