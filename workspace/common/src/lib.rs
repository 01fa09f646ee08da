//! Target-independent logic behind the arcade frontend: activity loading,
//! the games catalog with its progress derivation, and price chart shaping.
//! Nothing in here touches the DOM, so it is tested natively.

pub mod activity;
pub mod error;
pub mod games;
pub mod prices;

pub use activity::{
    fetch_activities, ActivitiesResponse, ActivityRecord, ActivitySource, ActivityTracker,
    FetchTicket, PendingFetch, TrackerEvent, UserData, UserId,
};
pub use error::FetchError;
pub use games::{
    find_game, listing_state, GameCategory, GameDescriptor, GameRoute, ListingState,
    ProgressSource, ProgressView, GAMES,
};
pub use prices::{
    axis_range, chart_inputs, has_chart_data, shape_points, AxisRange, ChartInputs, PriceBook,
    PricePoint, RECENT_WINDOW,
};
