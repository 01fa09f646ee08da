mod chart;
mod view;

pub use chart::StockChart;
pub use view::StockMarketPage;
