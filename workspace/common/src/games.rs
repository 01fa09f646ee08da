//! Catalog of mini-games shown on the listing page and the progress
//! each card displays.

use crate::activity::{ActivityTracker, UserId};

/// Skill area of a game; the frontend maps it to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCategory {
    Credit,
    Money,
    Banking,
    Investing,
}

/// Navigation target of a card's "Play" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameRoute {
    CreditScore,
    TaxRush,
    FlipCard,
    BankVaultDash,
    StockMarket,
    BankingBasics,
}

impl GameRoute {
    pub fn path(&self) -> &'static str {
        match self {
            GameRoute::CreditScore => "/dashboard/games/credit-score",
            GameRoute::TaxRush => "/dashboard/games/tax-rush",
            GameRoute::FlipCard => "/dashboard/games/flip-card",
            GameRoute::BankVaultDash => "/dashboard/games/bank-vault-dash",
            GameRoute::StockMarket => "/dashboard/games/stockmarket/app",
            GameRoute::BankingBasics => "/dashboard/games/banking-basics",
        }
    }
}

/// Where a card's progress bar gets its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSource {
    /// Derived from the user's recorded activities.
    Tracked,
    /// Hardcoded on the card; fetched data is ignored.
    Fixed { value: u8, label: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDescriptor {
    pub title: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub category: GameCategory,
    pub skill: &'static str,
    pub route: GameRoute,
    pub progress: ProgressSource,
}

/// Value and caption of a card's progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub value: u8,
    pub label: &'static str,
}

impl GameDescriptor {
    pub fn progress_view(&self, tracker: &ActivityTracker) -> ProgressView {
        match self.progress {
            ProgressSource::Fixed { value, label } => ProgressView { value, label },
            ProgressSource::Tracked => {
                let value = tracker.progress(self.title);
                ProgressView {
                    value,
                    label: if value > 0 { "Played" } else { "Not started" },
                }
            }
        }
    }
}

pub const GAMES: [GameDescriptor; 6] = [
    GameDescriptor {
        title: "Credit Score Adventure",
        badge: "Level 2",
        description: "Navigate the world of credit scores",
        duration: "5 min per level",
        category: GameCategory::Credit,
        skill: "Beginner",
        route: GameRoute::CreditScore,
        progress: ProgressSource::Fixed { value: 40, label: "Level 2/5" },
    },
    GameDescriptor {
        title: "Tax Rush",
        badge: "New",
        description: "Race against time to file taxes correctly",
        duration: "10 min",
        category: GameCategory::Money,
        skill: "Intermediate",
        route: GameRoute::TaxRush,
        progress: ProgressSource::Tracked,
    },
    GameDescriptor {
        title: "Flip-Card Memory Game",
        badge: "Beginner",
        description: "Learn about different banking services",
        duration: "8 min",
        category: GameCategory::Banking,
        skill: "Beginner",
        route: GameRoute::FlipCard,
        progress: ProgressSource::Fixed { value: 0, label: "Not started" },
    },
    GameDescriptor {
        title: "Bank Vault Dash",
        badge: "New",
        description: "Race to collect cash and dodge fees",
        duration: "1 min",
        category: GameCategory::Money,
        skill: "Beginner",
        route: GameRoute::BankVaultDash,
        progress: ProgressSource::Tracked,
    },
    GameDescriptor {
        title: "Stock Market Simulator",
        badge: "Popular",
        description: "Learn to invest in a simulated stock market",
        duration: "15 min",
        category: GameCategory::Investing,
        skill: "Intermediate",
        route: GameRoute::StockMarket,
        progress: ProgressSource::Tracked,
    },
    GameDescriptor {
        title: "Banking Basics",
        badge: "Beginner",
        description: "Learn about different banking services",
        duration: "8 min",
        category: GameCategory::Banking,
        skill: "Beginner",
        route: GameRoute::BankingBasics,
        progress: ProgressSource::Tracked,
    },
];

pub fn find_game(route: GameRoute) -> Option<&'static GameDescriptor> {
    GAMES.iter().find(|g| g.route == route)
}

/// Which of its three renderings the listing page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    /// No signed-in user: only a full-page spinner.
    AwaitingUser,
    /// Activities for the current user are in flight.
    Loading,
    /// The grid, possibly under a warning banner.
    Ready,
}

pub fn listing_state(identity: Option<&UserId>, tracker: &ActivityTracker) -> ListingState {
    if identity.is_none() {
        ListingState::AwaitingUser
    } else if tracker.is_loading() {
        ListingState::Loading
    } else {
        ListingState::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityRecord, TrackerEvent};
    use crate::error::FetchError;

    fn finished(result: crate::error::Result<Vec<ActivityRecord>>) -> ActivityTracker {
        let mut tracker = ActivityTracker::new();
        let ticket = tracker.request(Some(&UserId::new("alice"))).unwrap();
        tracker.apply(TrackerEvent::Started(ticket.clone()));
        tracker.apply(TrackerEvent::Finished(ticket, result));
        tracker
    }

    #[test]
    fn test_tracked_games_follow_activities() {
        let tracker = finished(Ok(vec![
            ActivityRecord::named("Tax Rush"),
            ActivityRecord::named("Stock Market Simulator"),
        ]));

        let views: Vec<_> = GAMES
            .iter()
            .filter(|g| g.progress == ProgressSource::Tracked)
            .map(|g| (g.title, g.progress_view(&tracker)))
            .collect();

        assert_eq!(
            views,
            vec![
                ("Tax Rush", ProgressView { value: 100, label: "Played" }),
                ("Bank Vault Dash", ProgressView { value: 0, label: "Not started" }),
                ("Stock Market Simulator", ProgressView { value: 100, label: "Played" }),
                ("Banking Basics", ProgressView { value: 0, label: "Not started" }),
            ]
        );
    }

    #[test]
    fn test_fixed_games_ignore_fetch_state() {
        let credit = find_game(GameRoute::CreditScore).unwrap();
        let flip = find_game(GameRoute::FlipCard).unwrap();
        let with_match = finished(Ok(vec![
            ActivityRecord::named("Credit Score Adventure"),
            ActivityRecord::named("Flip-Card Memory Game"),
        ]));

        for tracker in [ActivityTracker::new(), with_match] {
            assert_eq!(credit.progress_view(&tracker), ProgressView { value: 40, label: "Level 2/5" });
            assert_eq!(flip.progress_view(&tracker), ProgressView { value: 0, label: "Not started" });
        }
    }

    #[test]
    fn test_fault_zeroes_tracked_progress() {
        let tracker = finished(Err(FetchError::Fault("connection reset".to_string())));

        assert!(tracker.error().is_some());
        for game in GAMES.iter().filter(|g| g.progress == ProgressSource::Tracked) {
            assert_eq!(game.progress_view(&tracker).value, 0);
        }
    }

    #[test]
    fn test_listing_waits_for_user_whatever_the_tracker_says() {
        assert_eq!(listing_state(None, &ActivityTracker::new()), ListingState::AwaitingUser);
        assert_eq!(
            listing_state(None, &finished(Ok(Vec::new()))),
            ListingState::AwaitingUser
        );
    }

    #[test]
    fn test_listing_loading_until_fetch_finishes() {
        let alice = UserId::new("alice");
        let mut tracker = ActivityTracker::new();
        assert_eq!(listing_state(Some(&alice), &tracker), ListingState::Loading);

        let ticket = tracker.request(Some(&alice)).unwrap();
        tracker.apply(TrackerEvent::Started(ticket.clone()));
        assert_eq!(listing_state(Some(&alice), &tracker), ListingState::Loading);

        tracker.apply(TrackerEvent::Finished(ticket, Ok(Vec::new())));
        assert_eq!(listing_state(Some(&alice), &tracker), ListingState::Ready);
    }

    #[test]
    fn test_listing_ready_after_failed_fetch() {
        let tracker = finished(Err(FetchError::Failure("nope".to_string())));
        assert_eq!(
            listing_state(Some(&UserId::new("alice")), &tracker),
            ListingState::Ready
        );
    }

    #[test]
    fn test_routes_are_unique() {
        let mut paths: Vec<_> = GAMES.iter().map(|g| g.route.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), GAMES.len());
    }
}
