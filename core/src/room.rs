use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Difficulty, PUZZLES};
use crate::grid::{Cell, Grid};
use crate::room_id::RoomId;
use crate::session::{GameSession, GameStatus, Player};

pub type RoomSubscriber = Rc<dyn Fn(&GameSession)>;

type SubscriberList = Rc<RefCell<Vec<RoomSubscriber>>>;

/// In-memory stand-in for a realtime backend. Keeps one session per room and
/// replays a full state snapshot to every subscriber after each mutation —
/// never a delta. The live app does not use it; it exists so the flow can be
/// pointed at a real backend later without reshaping the callers.
#[derive(Default)]
pub struct RoomService {
    rooms: RefCell<HashMap<RoomId, GameSession>>,
    subscribers: RefCell<HashMap<RoomId, SubscriberList>>,
}

/// Handle returned by [`RoomService::subscribe`]; dropping it unregisters the
/// callback.
pub struct RoomSubscription {
    subscriber: RoomSubscriber,
    subscribers: SubscriberList,
}

impl Drop for RoomSubscription {
    fn drop(&mut self) {
        self.subscribers
            .borrow_mut()
            .retain(|entry| !Rc::ptr_eq(entry, &self.subscriber));
    }
}

impl RoomService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a room seeded with a uniformly random catalogue puzzle and one
    /// initial player. The room starts in `Waiting` with an empty grid.
    pub fn create_room(&self, rng: &mut impl Rng, player: Player) -> RoomId {
        let mut room_id = RoomId::generate(rng);
        while self.rooms.borrow().contains_key(&room_id) {
            room_id = RoomId::generate(rng);
        }
        let puzzle = PUZZLES.choose(rng).unwrap_or(&PUZZLES[0]);
        let session = GameSession {
            room_id: room_id.to_string(),
            puzzle_id: puzzle.id,
            players: vec![player],
            grid: Grid::empty(),
            status: GameStatus::Waiting,
            difficulty: puzzle.difficulty.unwrap_or(Difficulty::Low),
        };
        self.rooms.borrow_mut().insert(room_id.clone(), session);
        room_id
    }

    /// Appends a player and notifies subscribers. Unknown rooms fail
    /// gracefully with `false`.
    pub fn join_room(&self, room_id: &RoomId, player: Player) -> bool {
        {
            let mut rooms = self.rooms.borrow_mut();
            let Some(session) = rooms.get_mut(room_id) else {
                return false;
            };
            session.players.push(player);
        }
        self.notify(room_id);
        true
    }

    /// Registers a callback for the room. If the room exists the callback is
    /// invoked immediately with the current state, then once per mutation.
    pub fn subscribe(&self, room_id: &RoomId, subscriber: RoomSubscriber) -> RoomSubscription {
        let list = self
            .subscribers
            .borrow_mut()
            .entry(room_id.clone())
            .or_default()
            .clone();
        list.borrow_mut().push(subscriber.clone());
        let snapshot = self.rooms.borrow().get(room_id).cloned();
        if let Some(snapshot) = snapshot {
            subscriber(&snapshot);
        }
        RoomSubscription {
            subscriber,
            subscribers: list,
        }
    }

    /// Single-cell write, uppercased, then broadcast. Unknown rooms are a
    /// silent no-op.
    pub fn update_cell(&self, room_id: &RoomId, cell: Cell, letter: Option<char>) {
        {
            let mut rooms = self.rooms.borrow_mut();
            let Some(session) = rooms.get_mut(room_id) else {
                return;
            };
            session.grid = session
                .grid
                .with_letter(cell, letter.map(|ch| ch.to_ascii_uppercase()));
        }
        self.notify(room_id);
    }

    pub fn room_snapshot(&self, room_id: &RoomId) -> Option<GameSession> {
        self.rooms.borrow().get(room_id).cloned()
    }

    fn notify(&self, room_id: &RoomId) {
        let Some(snapshot) = self.rooms.borrow().get(room_id).cloned() else {
            return;
        };
        let Some(list) = self.subscribers.borrow().get(room_id).cloned() else {
            return;
        };
        let subscribers = list.borrow().clone();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}
