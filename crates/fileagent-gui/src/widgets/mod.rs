/// UI widgets for FileAgent.

pub mod status_bar;
pub mod toolbar;
