pub mod actor_view;
pub mod chart_view;
pub mod format;

/// Message shown in a panel instead of data.
pub fn placeholder(message: &str) -> String {
    format!("-- {} --\n", message)
}
