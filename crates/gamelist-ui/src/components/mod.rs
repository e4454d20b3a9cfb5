pub mod game_list;
pub mod line_summary;
pub mod list_controls;
pub mod mini_board;
