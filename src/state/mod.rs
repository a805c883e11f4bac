/// State management module
/// 
/// This module holds everything the UI renders from:
/// - Shared data structures (data.rs)
/// - Messages, commands and the pure transition function (update.rs)
/// - Snapshot history for the time-travel slider (history.rs)
/// - Dispatch over the history with in-flight tracking (session.rs)

pub mod data;
pub mod history;
pub mod session;
pub mod update;
