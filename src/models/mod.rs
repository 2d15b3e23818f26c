pub mod bar;
pub mod frame;
pub mod series;

pub use bar::Bar;
pub use frame::IndicatorFrame;
pub use series::Series;
