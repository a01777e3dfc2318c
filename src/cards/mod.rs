pub mod card;
pub use card::*;

pub mod holding;
pub use holding::*;

pub mod rank;
pub use rank::*;

pub mod seat;
pub use seat::*;

pub mod suit;
pub use suit::*;
