pub mod current_time;
pub mod directions;
pub mod google_maps;
pub mod place;
