//! Console front-end for the five-in-a-row engine
//!
//! Plays a human against the engine in the terminal. Pass `--size N`,
//! `--depth D`, or `--pvp` for hotseat play; moves are entered as
//! `row col`. Rendering and input handling live here, the engine only
//! ever sees the `Game` API.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use gomoku::{Game, GameMode, GameStatus, Player, DEFAULT_BOARD_SIZE};

struct Options {
    size: usize,
    depth: u32,
    mode: GameMode,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        size: DEFAULT_BOARD_SIZE,
        depth: 3,
        mode: GameMode::HumanVsAi,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                let value = args.next().context("--size needs a value")?;
                options.size = value.parse().context("--size expects a number")?;
            }
            "--depth" => {
                let value = args.next().context("--depth needs a value")?;
                options.depth = value.parse().context("--depth expects a number")?;
            }
            "--pvp" => options.mode = GameMode::HumanVsHuman,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(options)
}

fn print_board(game: &Game) {
    let size = game.board().size();
    print!("   ");
    for c in 0..size {
        print!("{c:2}");
    }
    println!();

    for r in 0..size {
        print!("{r:2} ");
        for c in 0..size {
            let pos = gomoku::Pos::new(r as u8, c as u8);
            let ch = match game.board().get(pos) {
                Some(Player::One) => " X",
                Some(Player::Two) => " O",
                None => " .",
            };
            print!("{ch}");
        }
        println!();
    }
}

fn read_move(stdin: &mut impl BufRead, size: usize) -> Result<Option<(u8, u8)>> {
    print!("move (row col, or q to quit): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    if line == "q" || line == "quit" {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
        println!("enter two numbers, e.g. `4 5`");
        return read_move(stdin, size);
    };
    let (Ok(row), Ok(col)) = (row.parse::<u8>(), col.parse::<u8>()) else {
        println!("enter two numbers, e.g. `4 5`");
        return read_move(stdin, size);
    };
    if row as usize >= size || col as usize >= size {
        println!("out of range for a {size}x{size} board");
        return read_move(stdin, size);
    }
    Ok(Some((row, col)))
}

fn announce(status: GameStatus) -> bool {
    match status {
        GameStatus::InProgress => false,
        GameStatus::Won(player) => {
            let name = match player {
                Player::One => "player one (X)",
                Player::Two => "player two (O)",
            };
            println!("\n{name} wins!");
            true
        }
        GameStatus::Draw => {
            println!("\nboard full: draw");
            true
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = parse_args()?;
    let mut game = Game::new(options.size, options.mode)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!(
        "five-in-a-row, {size}x{size}, depth {depth}",
        size = options.size,
        depth = options.depth
    );

    loop {
        print_board(&game);

        let mover = game.current_player();
        let human_turn = options.mode == GameMode::HumanVsHuman || mover == Player::One;

        if human_turn {
            let Some((row, col)) = read_move(&mut input, options.size)? else {
                println!("bye");
                return Ok(());
            };
            if !game.make_move(row, col, mover) {
                println!("illegal move");
                continue;
            }
        } else {
            let Some(pos) = game.find_best_move(options.depth) else {
                // No empty cell left to consider
                break;
            };
            println!("engine plays {} {}", pos.row, pos.col);
            game.make_move(pos.row, pos.col, mover);
        }

        if announce(game.status()) {
            print_board(&game);
            if let Some((first, last)) = game
                .winning_sequence()
                .first()
                .zip(game.winning_sequence().last())
            {
                println!(
                    "winning run: ({}, {}) to ({}, {})",
                    first.row, first.col, last.row, last.col
                );
            }
            return Ok(());
        }
    }

    Ok(())
}
