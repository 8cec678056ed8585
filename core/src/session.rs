use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Difficulty, PuzzleDef, PUZZLES};
use crate::grid::Grid;

/// Room identifier used for local play, where no real room exists.
pub const LOCAL_ROOM_ID: &str = "LOCAL-SESSION";

pub const PLAYER_ID_LEN: usize = 9;
const PLAYER_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Waiting,
    Playing,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Avatar {
    Owl,
    Dna,
    Beaker,
    Cell,
    Atom,
}

impl Avatar {
    pub const ALL: [Avatar; 5] = [
        Avatar::Owl,
        Avatar::Dna,
        Avatar::Beaker,
        Avatar::Cell,
        Avatar::Atom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Avatar::Owl => "Owl",
            Avatar::Dna => "DNA",
            Avatar::Beaker => "Beaker",
            Avatar::Cell => "Cell",
            Avatar::Atom => "Atom",
        }
    }

    pub fn next(self) -> Avatar {
        let index = Self::ALL
            .iter()
            .position(|avatar| *avatar == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub avatar: Avatar,
    pub score: u32,
}

impl Player {
    pub fn new(rng: &mut impl Rng, name: impl Into<String>, avatar: Avatar) -> Self {
        Self {
            id: random_player_id(rng),
            name: name.into(),
            avatar,
            score: 0,
        }
    }
}

pub fn random_player_id(rng: &mut impl Rng) -> String {
    (0..PLAYER_ID_LEN)
        .map(|_| PLAYER_ID_ALPHABET[rng.gen_range(0..PLAYER_ID_ALPHABET.len())] as char)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub room_id: String,
    pub puzzle_id: u32,
    pub players: Vec<Player>,
    pub grid: Grid,
    pub status: GameStatus,
    pub difficulty: Difficulty,
}

/// Starts a fresh local session: puzzles matching the requested difficulty,
/// falling back to the whole catalogue when none match, chosen uniformly.
pub fn start_game(rng: &mut impl Rng, players: Vec<Player>, difficulty: Difficulty) -> GameSession {
    start_game_from(rng, PUZZLES, players, difficulty)
}

pub fn start_game_from(
    rng: &mut impl Rng,
    catalogue: &[PuzzleDef],
    players: Vec<Player>,
    difficulty: Difficulty,
) -> GameSession {
    let matching: Vec<&PuzzleDef> = catalogue
        .iter()
        .filter(|puzzle| puzzle.difficulty == Some(difficulty))
        .collect();
    let pool = if matching.is_empty() {
        catalogue.iter().collect()
    } else {
        matching
    };
    let puzzle_id = pool
        .choose(rng)
        .copied()
        .or_else(|| catalogue.first())
        .map(|puzzle| puzzle.id)
        .unwrap_or(0);
    GameSession {
        room_id: LOCAL_ROOM_ID.to_string(),
        puzzle_id,
        players,
        grid: Grid::empty(),
        status: GameStatus::Playing,
        difficulty,
    }
}

/// Rotates the session to a new puzzle. Pool order: same difficulty with a
/// different id, then any different id, then the catalogue's first entry
/// (which may repeat the current puzzle). Grid and status reset either way.
pub fn advance_puzzle(rng: &mut impl Rng, session: &GameSession) -> GameSession {
    advance_puzzle_from(rng, PUZZLES, session)
}

pub fn advance_puzzle_from(
    rng: &mut impl Rng,
    catalogue: &[PuzzleDef],
    session: &GameSession,
) -> GameSession {
    let current = session.puzzle_id;
    let same_difficulty: Vec<&PuzzleDef> = catalogue
        .iter()
        .filter(|puzzle| puzzle.difficulty == Some(session.difficulty) && puzzle.id != current)
        .collect();
    let pool = if same_difficulty.is_empty() {
        catalogue.iter().filter(|puzzle| puzzle.id != current).collect()
    } else {
        same_difficulty
    };
    let puzzle_id = pool
        .choose(rng)
        .copied()
        .or_else(|| catalogue.first())
        .map(|puzzle| puzzle.id)
        .unwrap_or(current);
    GameSession {
        puzzle_id,
        grid: Grid::empty(),
        status: GameStatus::Playing,
        ..session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{puzzle_by_id, Direction, WordDef};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x6e17)
    }

    fn roster(rng: &mut impl Rng) -> Vec<Player> {
        vec![
            Player::new(rng, "Rosalind", Avatar::Dna),
            Player::new(rng, "Barbara", Avatar::Owl),
        ]
    }

    #[test]
    fn player_ids_are_nine_base36_chars() {
        let mut rng = rng();
        let player = Player::new(&mut rng, "Gregor", Avatar::Beaker);
        assert_eq!(player.id.len(), PLAYER_ID_LEN);
        assert!(player
            .id
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
        assert_eq!(player.score, 0);
    }

    #[test]
    fn avatars_cycle_in_order() {
        assert_eq!(Avatar::Owl.next(), Avatar::Dna);
        assert_eq!(Avatar::Atom.next(), Avatar::Owl);
    }

    #[test]
    fn start_picks_a_puzzle_of_the_requested_difficulty() {
        let mut rng = rng();
        for _ in 0..20 {
            let players = roster(&mut rng);
            let session = start_game(&mut rng, players, Difficulty::Low);
            assert!((1..=7).contains(&session.puzzle_id));
            assert!(session.grid.is_empty());
            assert_eq!(session.status, GameStatus::Playing);
            assert_eq!(session.room_id, LOCAL_ROOM_ID);
            assert_eq!(session.players.len(), 2);
        }
    }

    const UNTAGGED: &[PuzzleDef] = &[PuzzleDef {
        id: 50,
        topic: "untagged",
        width: 14,
        height: 14,
        words: &[WordDef {
            id: "D1",
            answer: "DNA",
            clue: "molecule",
            start_x: 0,
            start_y: 0,
            direction: Direction::Down,
        }],
        difficulty: None,
    }];

    #[test]
    fn start_falls_back_to_the_full_catalogue() {
        let mut rng = rng();
        let session = start_game_from(&mut rng, UNTAGGED, Vec::new(), Difficulty::Hard);
        assert_eq!(session.puzzle_id, 50);
        assert_eq!(session.difficulty, Difficulty::Hard);
    }

    #[test]
    fn advance_prefers_same_difficulty_and_never_repeats_when_possible() {
        let mut rng = rng();
        let players = roster(&mut rng);
        let mut session = start_game(&mut rng, players, Difficulty::Medium);
        for _ in 0..30 {
            let previous = session.puzzle_id;
            session.grid = session
                .grid
                .with_letter(crate::grid::Cell::new(0, 0), Some('A'));
            session = advance_puzzle(&mut rng, &session);
            assert_ne!(session.puzzle_id, previous);
            let next = puzzle_by_id(session.puzzle_id).expect("catalogue id");
            assert_eq!(next.difficulty, Some(Difficulty::Medium));
            assert!(session.grid.is_empty());
            assert_eq!(session.status, GameStatus::Playing);
        }
    }

    #[test]
    fn advance_repeats_the_only_puzzle_in_a_single_entry_catalogue() {
        let mut rng = rng();
        let session = start_game_from(&mut rng, UNTAGGED, Vec::new(), Difficulty::Low);
        assert_eq!(session.puzzle_id, 50);
        let advanced = advance_puzzle_from(&mut rng, UNTAGGED, &session);
        assert_eq!(advanced.puzzle_id, 50);
        assert!(advanced.grid.is_empty());
    }

    #[test]
    fn advance_crosses_difficulty_when_the_tier_is_exhausted() {
        // One Low puzzle plus one Hard puzzle: advancing from the Low one
        // must pick the Hard one rather than repeat.
        const MIXED: &[PuzzleDef] = &[
            PuzzleDef {
                id: 60,
                topic: "only low",
                width: 14,
                height: 14,
                words: &[],
                difficulty: Some(Difficulty::Low),
            },
            PuzzleDef {
                id: 61,
                topic: "only hard",
                width: 14,
                height: 14,
                words: &[],
                difficulty: Some(Difficulty::Hard),
            },
        ];
        let mut rng = rng();
        let session = start_game_from(&mut rng, MIXED, Vec::new(), Difficulty::Low);
        assert_eq!(session.puzzle_id, 60);
        let advanced = advance_puzzle_from(&mut rng, MIXED, &session);
        assert_eq!(advanced.puzzle_id, 61);
    }
}
