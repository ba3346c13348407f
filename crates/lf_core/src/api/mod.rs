pub mod json_api;

pub use json_api::{
    game_view_json, new_game_json, request_draw_json, reset_game_json, toggle_number_json,
    GameResponse, NewGameRequest, ToggleRequest,
};
