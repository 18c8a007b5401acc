pub mod commands;
pub mod effects;
pub mod events;
pub mod machine;
pub mod state;

pub use commands::BoardCommand;
pub use effects::BoardRuntime;
pub use events::BoardEvent;
pub use machine::BoardMachine;
pub use state::{AddressStatus, BoardState, Notice};
