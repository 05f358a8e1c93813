pub mod confirm_delete;
pub mod data_grid;
pub mod entity_list;
pub mod pagination_controls;
