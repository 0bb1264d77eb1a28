pub mod header;
pub mod predict_button;
pub mod result_panel;
pub mod upload_area;
