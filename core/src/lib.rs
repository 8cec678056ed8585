pub mod board;
pub mod catalog;
pub mod grid;
pub mod room;
pub mod room_id;
pub mod session;
pub mod solution;

pub use board::Board;
pub use catalog::{puzzle_by_id, Difficulty, Direction, PuzzleDef, WordDef, PUZZLES};
pub use grid::{Cell, Grid};
pub use room::{RoomService, RoomSubscriber, RoomSubscription};
pub use room_id::{RoomId, RoomIdError, ROOM_ID_ALPHABET, ROOM_ID_LEN};
pub use session::{
    advance_puzzle, start_game, Avatar, GameSession, GameStatus, Player, LOCAL_ROOM_ID,
};
pub use solution::SolutionKey;
