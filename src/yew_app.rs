use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{FocusEvent, HtmlElement, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::input::{parse_key, KeyCommand};
use genix_core::{
    advance_puzzle, puzzle_by_id, start_game, Avatar, Board, Cell, Difficulty, Direction,
    GameSession, Grid, Player,
};

/// Delay between the grid being solved and the celebration overlay, so the
/// finished answers stay readable for a moment.
const COMPLETION_OVERLAY_DELAY_MS: u32 = 2_000;

pub(crate) fn run() {
    yew::Renderer::<App>::new().render();
}

fn avatar_glyph(avatar: Avatar) -> &'static str {
    match avatar {
        Avatar::Owl => "\u{1F989}",
        Avatar::Dna => "\u{1F9EC}",
        Avatar::Beaker => "\u{1F9EA}",
        Avatar::Cell => "\u{1F9EB}",
        Avatar::Atom => "\u{269B}\u{FE0F}",
    }
}

fn cell_input_id(cell: Cell) -> String {
    format!("cell-{}-{}", cell.x, cell.y)
}

fn focus_cell_input(cell: Cell) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(&cell_input_id(cell)) else {
        return;
    };
    if let Ok(input) = element.dyn_into::<HtmlElement>() {
        let _ = input.focus();
    }
}

#[function_component(App)]
fn app() -> Html {
    let session = use_state(|| None::<GameSession>);

    let on_start = {
        let session = session.clone();
        Callback::from(move |(players, difficulty): (Vec<Player>, Difficulty)| {
            let mut rng = rand::thread_rng();
            let started = start_game(&mut rng, players, difficulty);
            gloo::console::log!("game started", started.puzzle_id, difficulty.label());
            session.set(Some(started));
        })
    };

    let on_exit = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            gloo::console::log!("back to lobby");
            session.set(None);
        })
    };

    let on_next = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let Some(current) = (*session).clone() else {
                return;
            };
            let mut rng = rand::thread_rng();
            let next = advance_puzzle(&mut rng, &current);
            gloo::console::log!("next puzzle", next.puzzle_id);
            session.set(Some(next));
        })
    };

    let on_grid = {
        let session = session.clone();
        Callback::from(move |grid: Grid| {
            let Some(mut current) = (*session).clone() else {
                return;
            };
            current.grid = grid;
            session.set(Some(current));
        })
    };

    match (*session).clone() {
        Some(active) => html! {
            <GameRoom
                session={active}
                on_exit={on_exit}
                on_next={on_next}
                on_grid={on_grid}
            />
        },
        None => html! { <Lobby on_start={on_start} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LobbyProps {
    on_start: Callback<(Vec<Player>, Difficulty)>,
}

#[function_component(Lobby)]
fn lobby(props: &LobbyProps) -> Html {
    let name = use_state(String::new);
    let avatar = use_state(|| Avatar::Owl);
    let players = use_state(Vec::<Player>::new);
    let difficulty = use_state(|| Difficulty::Low);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_add = {
        let name = name.clone();
        let avatar = avatar.clone();
        let players = players.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if name.trim().is_empty() {
                return;
            }
            let mut rng = rand::thread_rng();
            let mut roster = (*players).clone();
            roster.push(Player::new(&mut rng, (*name).clone(), *avatar));
            players.set(roster);
            name.set(String::new());
            avatar.set(avatar.next());
        })
    };

    let avatar_buttons: Html = Avatar::ALL
        .iter()
        .map(|&option| {
            let selected = *avatar == option;
            let avatar = avatar.clone();
            let onclick = Callback::from(move |_: MouseEvent| avatar.set(option));
            html! {
                <button
                    type="button"
                    class={classes!("avatar-pick", selected.then_some("avatar-pick-selected"))}
                    title={option.label()}
                    onclick={onclick}
                >
                    { avatar_glyph(option) }
                </button>
            }
        })
        .collect();

    let roster: Html = if players.is_empty() {
        html! { <p class="roster-empty">{ "Waiting for personnel..." }</p> }
    } else {
        players
            .iter()
            .map(|player| {
                let id = player.id.clone();
                let players = players.clone();
                let on_remove = Callback::from(move |_: MouseEvent| {
                    let roster: Vec<Player> = players
                        .iter()
                        .filter(|entry| entry.id != id)
                        .cloned()
                        .collect();
                    players.set(roster);
                });
                html! {
                    <div class="roster-entry" key={player.id.clone()}>
                        <span class="roster-avatar">{ avatar_glyph(player.avatar) }</span>
                        <span class="roster-name">{ player.name.clone() }</span>
                        <button type="button" class="roster-remove" onclick={on_remove}>
                            { "\u{00D7}" }
                        </button>
                    </div>
                }
            })
            .collect()
    };

    let difficulty_buttons: Html = Difficulty::ALL
        .iter()
        .map(|&option| {
            let selected = *difficulty == option;
            let difficulty = difficulty.clone();
            let onclick = Callback::from(move |_: MouseEvent| difficulty.set(option));
            html! {
                <button
                    type="button"
                    class={classes!("difficulty-pick", selected.then_some("difficulty-pick-selected"))}
                    onclick={onclick}
                >
                    { option.label() }
                </button>
            }
        })
        .collect();

    let on_start_click = {
        let players = players.clone();
        let difficulty = difficulty.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| {
            if players.is_empty() {
                return;
            }
            on_start.emit(((*players).clone(), *difficulty));
        })
    };

    html! {
        <div class="lobby">
            <div class="lobby-brand">
                <h1>{ "GENI-X" }</h1>
                <h2>{ "BIOS 344: Molecular Biology and Genetics" }</h2>
                <ul class="lobby-objectives">
                    <li>{ "Solve advanced genetic puzzles." }</li>
                    <li>{ "Topics: inheritance, mapping, gene regulation, genomics." }</li>
                    <li>{ "Collaborate to decode the sequence." }</li>
                </ul>
            </div>
            <div class="lobby-panel">
                <h2>{ "Team Roster" }</h2>
                <form class="lobby-form" onsubmit={on_add}>
                    <label>{ "Codename" }</label>
                    <input
                        id="codename"
                        type="text"
                        placeholder="ENTER ID..."
                        maxlength="12"
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                    <label>{ "Phenotype" }</label>
                    <div class="avatar-row">{ avatar_buttons }</div>
                    <button type="submit" disabled={name.trim().is_empty()}>
                        { "Add Scientist" }
                    </button>
                </form>
                <div class="roster">{ roster }</div>
                <label>{ "Difficulty Level" }</label>
                <div class="difficulty-row">{ difficulty_buttons }</div>
                <button
                    type="button"
                    class="start-button"
                    disabled={players.is_empty()}
                    onclick={on_start_click}
                >
                    { "Start Sequencing" }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GameRoomProps {
    session: GameSession,
    on_exit: Callback<()>,
    on_next: Callback<()>,
    on_grid: Callback<Grid>,
}

#[function_component(GameRoom)]
fn game_room(props: &GameRoomProps) -> Html {
    let focused = use_state(|| None::<Cell>);
    let show_overlay = use_state(|| false);
    let pending_overlay = use_mut_ref(|| None::<Timeout>);

    let board = use_memo(props.session.puzzle_id, |&id| {
        puzzle_by_id(id).map(|puzzle| Rc::new(Board::new(puzzle)))
    });
    let board = (*board).clone();

    // The first word's start takes focus on each new puzzle unless the player
    // already has a cell selected.
    {
        let focused = focused.clone();
        let first = board.as_ref().and_then(|board| board.first_cell());
        use_effect_with(props.session.puzzle_id, move |_| {
            if focused.is_none() {
                focused.set(first);
            }
            || ()
        });
    }

    let is_complete = board
        .as_ref()
        .map(|board| board.is_complete(&props.session.grid))
        .unwrap_or(false);

    {
        let show_overlay = show_overlay.clone();
        let pending_overlay = pending_overlay.clone();
        use_effect_with(is_complete, move |complete| {
            if *complete {
                gloo::console::log!("sequence decoded");
                let show_overlay = show_overlay.clone();
                *pending_overlay.borrow_mut() =
                    Some(Timeout::new(COMPLETION_OVERLAY_DELAY_MS, move || {
                        show_overlay.set(true);
                    }));
            } else {
                // Dropping the pending timeout cancels it.
                pending_overlay.borrow_mut().take();
                show_overlay.set(false);
            }
            || ()
        });
    }

    let set_focused = {
        let focused = focused.clone();
        Callback::from(move |cell: Option<Cell>| focused.set(cell))
    };

    let on_hint = {
        let board = board.clone();
        let grid = props.session.grid.clone();
        let focused = focused.clone();
        let on_grid = props.on_grid.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(board) = board.as_ref() else {
                return;
            };
            let (next_grid, next_focus) = board.hint(&grid, *focused);
            if next_grid != grid {
                on_grid.emit(next_grid);
            }
            focused.set(next_focus);
        })
    };

    let on_reveal = {
        let board = board.clone();
        let grid = props.session.grid.clone();
        let on_grid = props.on_grid.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(board) = board.as_ref() else {
                return;
            };
            if board.solution().is_empty() {
                return;
            }
            on_grid.emit(board.reveal_all(&grid));
        })
    };

    let keep_focus = Callback::from(|event: MouseEvent| event.prevent_default());

    let on_exit_click = {
        let on_exit = props.on_exit.clone();
        Callback::from(move |_: MouseEvent| on_exit.emit(()))
    };
    let on_next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let on_overlay_exit = {
        let on_exit = props.on_exit.clone();
        Callback::from(move |_: MouseEvent| on_exit.emit(()))
    };

    let Some(board) = board else {
        gloo::console::warn!("unknown puzzle id", props.session.puzzle_id);
        return html! { <div class="loading">{ "Loading genome sequence..." }</div> };
    };

    let total_score: u32 = props.session.players.iter().map(|player| player.score).sum();
    let roster: Html = props
        .session
        .players
        .iter()
        .map(|player| {
            html! {
                <div class="roster-entry" key={player.id.clone()}>
                    <span class="roster-avatar">{ avatar_glyph(player.avatar) }</span>
                    <span class="roster-name">{ player.name.clone() }</span>
                </div>
            }
        })
        .collect();

    html! {
        <div class="game-room">
            if *show_overlay {
                <div class="overlay">
                    <div class="overlay-panel">
                        <h2>{ "SEQUENCE DECODED" }</h2>
                        <p>{ "Excellent work! The genetic structure has been fully analyzed and verified." }</p>
                        <button type="button" class="overlay-next" onclick={on_next_click}>
                            { "Start Next Sequence" }
                        </button>
                        <button type="button" class="overlay-exit" onclick={on_overlay_exit}>
                            { "Return to Base" }
                        </button>
                    </div>
                </div>
            }
            <div class="game-main">
                <header class="game-header">
                    <div>
                        <h2>
                            <span class="game-header-label">{ "LAB SESSION: " }</span>
                            { props.session.difficulty.label().to_uppercase() }
                        </h2>
                        <p class="game-topic">{ format!("TOPIC: {}", board.puzzle().topic) }</p>
                    </div>
                    <div class="game-actions">
                        <span class="game-player-count">
                            { format!("{} active", props.session.players.len()) }
                        </span>
                        <button type="button" onmousedown={keep_focus.clone()} onclick={on_hint}>
                            { "Hint" }
                        </button>
                        <button type="button" onmousedown={keep_focus} onclick={on_reveal}>
                            { "Reveal" }
                        </button>
                        <button type="button" onclick={on_exit_click}>{ "Exit" }</button>
                    </div>
                </header>
                <p class="game-help">
                    { "Click a cell to select it, then press Hint to reveal the letter." }
                </p>
                <GridView
                    board={board.clone()}
                    grid={props.session.grid.clone()}
                    focused={*focused}
                    on_grid={props.on_grid.clone()}
                    on_focus={set_focused.clone()}
                />
            </div>
            <aside class="game-sidebar">
                <div class="roster-strip">
                    <h3>{ "Team Roster" }</h3>
                    <span class="roster-score">{ format!("{total_score} XP") }</span>
                    { roster }
                </div>
                <div class="clues">
                    <h3 class="clues-across">{ "Across" }</h3>
                    <ul>{ clue_list(&board, Direction::Across, &set_focused) }</ul>
                    <h3 class="clues-down">{ "Down" }</h3>
                    <ul>{ clue_list(&board, Direction::Down, &set_focused) }</ul>
                </div>
            </aside>
        </div>
    }
}

fn clue_list(board: &Board, direction: Direction, on_focus: &Callback<Option<Cell>>) -> Html {
    board
        .puzzle()
        .words
        .iter()
        .filter(|word| word.direction == direction)
        .map(|word| {
            let start = word.start();
            let on_focus = on_focus.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_focus.emit(Some(start)));
            html! {
                <li class="clue" key={word.id} onclick={onclick}>
                    <span class="clue-id">{ word.id }</span>
                    <span class="clue-text">{ word.clue }</span>
                </li>
            }
        })
        .collect()
}

#[derive(Properties)]
struct GridViewProps {
    board: Rc<Board>,
    grid: Grid,
    focused: Option<Cell>,
    on_grid: Callback<Grid>,
    on_focus: Callback<Option<Cell>>,
}

impl PartialEq for GridViewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.board, &other.board)
            && self.grid == other.grid
            && self.focused == other.focused
            && self.on_grid == other.on_grid
            && self.on_focus == other.on_focus
    }
}

#[function_component(GridView)]
fn grid_view(props: &GridViewProps) -> Html {
    // Re-focus after every grid change as well, so writes that arrive from
    // the hint button do not drop the selection.
    {
        let focused = props.focused;
        let grid = props.grid.clone();
        use_effect_with((focused, grid), move |(focused, _)| {
            if let Some(cell) = focused {
                focus_cell_input(*cell);
            }
            || ()
        });
    }

    let width = props.board.puzzle().width as i32;
    let height = props.board.puzzle().height as i32;
    let mut cells = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let cell = Cell::new(x, y);
            if !props.board.is_valid(cell) {
                cells.push(html! {
                    <div class="cell cell-blocked" key={cell.to_string()}></div>
                });
                continue;
            }

            let letter = props.grid.letter(cell);
            let value = letter.map(String::from).unwrap_or_default();
            let mut class = classes!("cell", "cell-open");
            match letter {
                Some(entered) if props.board.solution().letter(cell) == Some(entered) => {
                    class.push("cell-correct");
                }
                Some(_) => class.push("cell-wrong"),
                None => {}
            }
            if props.focused == Some(cell) {
                class.push("cell-focused");
            }

            let onfocus = {
                let on_focus = props.on_focus.clone();
                Callback::from(move |_: FocusEvent| on_focus.emit(Some(cell)))
            };
            let onkeydown = {
                let board = props.board.clone();
                let grid = props.grid.clone();
                let on_grid = props.on_grid.clone();
                let on_focus = props.on_focus.clone();
                Callback::from(move |event: KeyboardEvent| {
                    let Some(command) = parse_key(&event.key()) else {
                        return;
                    };
                    match command {
                        KeyCommand::Move { dx, dy } => {
                            let next = board.move_focus(cell, dx, dy);
                            if next != cell {
                                event.prevent_default();
                                on_focus.emit(Some(next));
                            }
                        }
                        KeyCommand::Backspace => {
                            event.prevent_default();
                            let (next_grid, next_focus) = board.backspace(&grid, cell);
                            if next_grid != grid {
                                on_grid.emit(next_grid);
                            }
                            on_focus.emit(Some(next_focus));
                        }
                    }
                })
            };
            let oninput = {
                let board = props.board.clone();
                let grid = props.grid.clone();
                let on_grid = props.on_grid.clone();
                let on_focus = props.on_focus.clone();
                Callback::from(move |event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    match board.enter(&grid, cell, &input.value()) {
                        Some((next_grid, next_focus)) => {
                            input.set_value(
                                &next_grid.letter(cell).map(String::from).unwrap_or_default(),
                            );
                            on_grid.emit(next_grid);
                            if next_focus != cell {
                                on_focus.emit(Some(next_focus));
                            }
                        }
                        None => {
                            // Rejected input; put the previous value back.
                            input.set_value(
                                &grid.letter(cell).map(String::from).unwrap_or_default(),
                            );
                        }
                    }
                })
            };

            cells.push(html! {
                <div class={class} key={cell.to_string()}>
                    if let Some(number) = props.board.number(cell) {
                        <span class="cell-number">{ number }</span>
                    }
                    <input
                        id={cell_input_id(cell)}
                        type="text"
                        maxlength="1"
                        value={value}
                        onfocus={onfocus}
                        onkeydown={onkeydown}
                        oninput={oninput}
                    />
                </div>
            });
        }
    }

    html! {
        <div
            class="grid"
            style={format!("grid-template-columns: repeat({width}, minmax(0, 1fr));")}
        >
            { for cells }
        </div>
    }
}
