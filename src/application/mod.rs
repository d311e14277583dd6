mod game_state;
mod generation_loop;
mod messages;
mod viewport;

pub use game_state::GameState;
pub use generation_loop::{DEFAULT_TICK_INTERVAL, GenerationLoop, Subscription, SubscriptionId};
pub use messages::{StartMessage, TickMessage};
pub use viewport::Viewport;
