pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;

pub use actions::*;
pub use executor::{execute_queued_actions, ActivePreview};
pub use plugin::GameActionsPlugin;
pub use queue::*;
pub use result_log::ActionResultLog;

#[cfg(test)]
mod tests;
