/// UI panels for FileAgent.
pub mod file_panel;
pub mod report_panel;
