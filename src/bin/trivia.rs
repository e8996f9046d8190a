use clap::Parser;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncBufReadExt, BufReader};
use trivia_board::game::{RoundView, Snapshot};
use trivia_board::logging::{self, Level};
use trivia_board::{
    Announcement, AttemptKind, CellKind, Clock, ContentPool, Cue, Effect, GameConfig, GameError,
    GamePhase, GameSession, PlayerId, PointValue, Rejection, RoundStage, Transition,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Category-board trivia for 2-6 players")]
struct Cli {
    /// Content pool: a JSON array of categories.
    #[arg(long)]
    pool: PathBuf,
    /// Comma-separated player names.
    #[arg(long, value_delimiter = ',', default_value = "Player 1,Player 2")]
    players: Vec<String>,
    #[arg(long)]
    seed: Option<u64>,
    /// Partial `GameConfig` as JSON.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Structured JSON logs on stderr.
    #[arg(long)]
    log: bool,
}

enum Input {
    Pick { column: usize, value: u32 },
    Answer(usize),
    Pass,
    Next,
    Board,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let input = match words.next()? {
        "pick" | "p" => Input::Pick {
            column: words.next()?.parse().ok()?,
            value: words.next()?.parse().ok()?,
        },
        "answer" | "a" => Input::Answer(words.next()?.parse().ok()?),
        "pass" => Input::Pass,
        "next" | "n" => Input::Next,
        "board" | "b" => Input::Board,
        "help" | "?" => Input::Help,
        "quit" | "q" => Input::Quit,
        _ => return None,
    };
    Some(input)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log {
        logging::enable();
    }

    let mut session = match setup(&cli) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            logging::emit(
                Level::Warn,
                "setup_failed",
                None,
                json!({ "reason": err.to_string(), "content": err.is_content_error() }),
            );
            return ExitCode::FAILURE;
        }
    };

    print_board(&session.snapshot());
    print_help();

    let (mut clock, mut clock_rx) = Clock::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let result = tokio::select! {
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let Some(input) = parse_input(line) else {
                    println!("unrecognized command; type `help`");
                    continue;
                };
                match input {
                    Input::Quit => break,
                    Input::Help => {
                        print_help();
                        continue;
                    }
                    Input::Board => {
                        print_snapshot(&session.snapshot());
                        continue;
                    }
                    other => handle_input(&mut session, other),
                }
            }
            Some(event) = clock_rx.recv() => {
                match clock.resolve(event) {
                    Some(command) => session.apply(command),
                    None => continue,
                }
            }
        };

        match result {
            Ok(transition) => {
                clock.apply(&transition.effects);
                report(&transition);
                if transition.snapshot.phase == GamePhase::Complete {
                    break;
                }
            }
            Err(err) => println!("! {err}"),
        }
    }

    clock.stop_all();
    ExitCode::SUCCESS
}

fn setup(cli: &Cli) -> Result<GameSession, GameError> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_json(&read(path)?)?,
        None => GameConfig::default(),
    };
    let pool = ContentPool::from_json(&read(&cli.pool)?)?;
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut session = GameSession::new(config, seed);
    session.configure_game(&cli.players, &pool)?;
    Ok(session)
}

fn read(path: &Path) -> Result<String, GameError> {
    std::fs::read_to_string(path)
        .map_err(|e| GameError::InvalidConfig(format!("{}: {e}", path.display())))
}

fn handle_input(session: &mut GameSession, input: Input) -> Result<Transition, GameError> {
    match input {
        Input::Pick { column, value } => {
            let snapshot = session.snapshot();
            let category = column
                .checked_sub(1)
                .and_then(|i| snapshot.board.get(i))
                .map(|c| c.category_id.clone())
                .ok_or_else(|| GameError::from(Rejection::UnknownCell))?;
            let value = PointValue::try_from(value)?;
            session.select_cell(&category, value)
        }
        Input::Answer(number) => {
            let option = session
                .snapshot()
                .round
                .and_then(|r| number.checked_sub(1).and_then(|i| r.options.get(i).cloned()))
                .ok_or_else(|| GameError::from(Rejection::UnknownOption))?;
            session.submit_answer(option)
        }
        Input::Pass => session.pass(),
        Input::Next => session.acknowledge(),
        Input::Board | Input::Help | Input::Quit => Ok(Transition {
            effects: Default::default(),
            snapshot: session.snapshot(),
        }),
    }
}

// === Rendering ===

fn name(snapshot: &Snapshot, player: PlayerId) -> &str {
    snapshot
        .players
        .get(player.index())
        .map_or("?", |p| p.name.as_str())
}

fn report(transition: &Transition) {
    let snapshot = &transition.snapshot;
    for effect in &transition.effects {
        match effect {
            Effect::Announce { announcement, .. } => {
                println!("*** {} ***", announcement_banner(*announcement));
            }
            Effect::StartCountdown { .. } => {
                if let Some(round) = &snapshot.round {
                    print_round(snapshot, round);
                }
            }
            Effect::Cue { cue: Cue::Tick } => {
                if let Some(round) = &snapshot.round {
                    println!("  [{}s]", round.remaining_seconds);
                }
            }
            Effect::AttemptFailed {
                player,
                kind,
                penalty,
            } => {
                let what = match kind {
                    AttemptKind::WrongAnswer => "wrong",
                    AttemptKind::Timeout => "out of time",
                    AttemptKind::Pass => "passed",
                };
                println!("{}: {what} (-{penalty})", name(snapshot, *player));
            }
            Effect::AnswerCorrect { player, award } => {
                let mut line = format!("{}: correct! +{}", name(snapshot, *player), award.earned);
                if award.is_speed_bonus {
                    line.push_str(&format!(" (speed +{})", award.speed_bonus_points));
                }
                if award.is_streak_bonus {
                    line.push_str(" (streak x1.5)");
                }
                println!("{line}");
            }
            Effect::RoundFailed => println!("Nobody got it."),
            Effect::TurnAdvanced { picker } => {
                print_board(snapshot);
                println!("{} picks next.", name(snapshot, *picker));
            }
            Effect::GameComplete => print_standings(snapshot),
            Effect::StopCountdown | Effect::Cue { .. } => {}
        }
    }

    if let Some(round) = &snapshot.round {
        if round.stage == RoundStage::Revealed {
            if let Some(answer) = &round.correct_answer {
                println!("Answer: {answer}. Type `next` to continue.");
            }
        }
    }
}

fn announcement_banner(announcement: Announcement) -> &'static str {
    match announcement {
        Announcement::Bonus => "BONUS: double points",
        Announcement::Forced => "FORCED: the picker must answer",
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    print_board(snapshot);
    if let Some(round) = &snapshot.round {
        print_round(snapshot, round);
    }
}

fn print_board(snapshot: &Snapshot) {
    println!();
    for (i, column) in snapshot.board.iter().enumerate() {
        let cells: Vec<String> = column
            .cells
            .iter()
            .map(|c| {
                if c.closed {
                    " -- ".to_string()
                } else {
                    format!("{:>4}", u32::from(c.value))
                }
            })
            .collect();
        println!("{:>2}. {:<24}{}", i + 1, column.title, cells.join(" "));
    }
    let scores: Vec<String> = snapshot
        .players
        .iter()
        .map(|p| {
            let flame = if p.on_streak { "*" } else { "" };
            format!("{} {}{}", p.name, p.score, flame)
        })
        .collect();
    println!("Scores: {}", scores.join(" | "));
    if snapshot.round.is_none() {
        if let Some(picker) = snapshot.picker {
            println!("Turn {}: {} picks.", snapshot.turn, name(snapshot, picker));
        }
    }
}

fn print_round(snapshot: &Snapshot, round: &RoundView) {
    let tag = match round.kind {
        CellKind::Bonus => " [bonus]",
        CellKind::Forced => " [forced]",
        CellKind::Normal => "",
    };
    println!();
    println!(
        "{} for {}{}: {}",
        round.category_title, round.effective_value, tag, round.prompt
    );
    for (i, option) in round.options.iter().enumerate() {
        let mark = if round.eliminated_options.contains(option) {
            "x"
        } else {
            " "
        };
        println!("  {mark} {}. {option}", i + 1);
    }
    let pass = if round.pass_allowed { ", pass" } else { "" };
    println!(
        "{} to answer ({}s; answer <1-4>{pass})",
        name(snapshot, round.answering),
        round.remaining_seconds
    );
}

fn print_standings(snapshot: &Snapshot) {
    println!();
    println!("Final standings:");
    for standing in snapshot.standings.iter().flatten() {
        println!("  {}. {} {}", standing.rank, standing.name, standing.score);
    }
}

fn print_help() {
    println!("Commands: pick <column> <value>, answer <1-4>, pass, next, board, help, quit");
}
