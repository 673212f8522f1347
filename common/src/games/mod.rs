mod observer;
mod session_rng;

pub mod tictactoe;

pub use observer::GameObserver;
pub use session_rng::SessionRng;
