pub mod header;
pub mod nav_bar;
pub mod progress_bar;
pub mod water_panel;
pub mod food_journal;
pub mod recipe_panel;
