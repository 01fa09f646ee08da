mod card;
mod view;

pub use card::GameCard;
pub use view::GamesPage;
