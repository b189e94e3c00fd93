use wasm_bindgen::prelude::*;
use guess_engine::*;

pub mod farewell;
pub mod game;
pub mod languages;
pub mod snapshot;
pub mod words;

pub use game::AssemblyEndgame;

guess_web::export_game!(AssemblyEndgame, "assembly-endgame");
