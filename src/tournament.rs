use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use threadpool::ThreadPool;
use tracing::{debug, info};

use crate::agent::Agent;
use crate::config::TournamentConfig;
use crate::game::{Game, Move, Player};
use crate::isolation::Board;

pub type AgentBuilder<'a> = &'a dyn Fn(u64) -> Box<dyn Agent<Board> + Send>;

/// Why a player lost before running out of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forfeit {
    Timeout,
    IllegalMove(Move),
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Player,
    pub forfeit: Option<Forfeit>,
    pub moves: Vec<Move>,
    pub board: Board,
}

/*====================================================================================================================*/

/// Plays `num_moves` random plies, stopping early if the player to move is stuck.
pub fn random_opening(board: &mut Board, num_moves: u32, rng: &mut StdRng) {
    for _ in 0..num_moves {
        match board.active_legal_moves().choose(rng) {
            Some(&move_) => board.apply_move(move_),
            None => break,
        }
    }
}

fn single_ply(board: &mut Board, playing_agent: &mut dyn Agent<Board>, time_limit_ms: f64) -> Result<Move, Forfeit> {
    let start_t = Instant::now();
    let time_left = || time_limit_ms - start_t.elapsed().as_secs_f64() * 1000.0;

    let player_move = playing_agent.get_move(board, &time_left);

    if time_left() < 0.0 {
        return Err(Forfeit::Timeout);
    }

    if !board.is_legal_move(player_move) {
        return Err(Forfeit::IllegalMove(player_move));
    }

    board.apply_move(player_move);

    Ok(player_move)
}

/// Plays `board` to the end; the player to move without legal moves loses, as does one that is late or illegal.
pub fn play_game(
    board: Board,
    player_one: &mut dyn Agent<Board>,
    player_two: &mut dyn Agent<Board>,
    time_limit_ms: f64,
) -> GameRecord {
    let mut board = board;
    let mut moves = Vec::new();

    loop {
        let current_player = board.active_player();

        if board.active_legal_moves().is_empty() {
            return GameRecord {
                winner: !current_player,
                forfeit: None,
                moves,
                board,
            };
        }

        let playing_agent: &mut dyn Agent<Board> = match current_player {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };

        match single_ply(&mut board, playing_agent, time_limit_ms) {
            Ok(player_move) => moves.push(player_move),
            Err(forfeit) => {
                debug!(player = %current_player, ?forfeit, "player forfeited\n{}", board);

                return GameRecord {
                    winner: !current_player,
                    forfeit: Some(forfeit),
                    moves,
                    board,
                };
            }
        }
    }
}

/*====================================================================================================================*/

/// Win counts from the point of view of the two configured agents, independent of who moved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TournamentResult {
    pub first_wins: u64,
    pub second_wins: u64,
    pub forfeits: u64,
}

/// Plays `config.games` games on a thread pool, alternating which agent moves first.
///
/// Agents are built per game with the game index, so seeded agents stay reproducible.
pub fn run_tournament(
    config: &TournamentConfig,
    first_builder: AgentBuilder,
    second_builder: AgentBuilder,
) -> TournamentResult {
    let first_wins = Arc::new(AtomicU64::new(0));
    let second_wins = Arc::new(AtomicU64::new(0));
    let forfeits = Arc::new(AtomicU64::new(0));

    let pool = ThreadPool::new(config.workers);

    for game_idx in 0..config.games {
        let game_seed = config.seed.wrapping_add(game_idx as u64);

        let mut board = Board::new(config.width, config.height);
        random_opening(&mut board, config.opening_moves, &mut StdRng::seed_from_u64(game_seed));

        let first_agent = first_builder(game_seed);
        let second_agent = second_builder(game_seed);
        let first_moves_first = game_idx % 2 == 0;

        let first_wins = Arc::clone(&first_wins);
        let second_wins = Arc::clone(&second_wins);
        let forfeits = Arc::clone(&forfeits);
        let time_limit_ms = config.time_limit_ms;

        pool.execute(move || {
            let (mut agent_one, mut agent_two) = match first_moves_first {
                true => (first_agent, second_agent),
                false => (second_agent, first_agent),
            };

            let record = play_game(board, agent_one.as_mut(), agent_two.as_mut(), time_limit_ms);

            let first_won = (record.winner == Player::One) == first_moves_first;

            debug!(game_idx, first_won, plies = record.moves.len(), "game finished");

            match first_won {
                true => first_wins.fetch_add(1, Ordering::Release),
                false => second_wins.fetch_add(1, Ordering::Release),
            };

            if record.forfeit.is_some() {
                forfeits.fetch_add(1, Ordering::Release);
            }
        });
    }

    pool.join();

    let result = TournamentResult {
        first_wins: first_wins.load(Ordering::Acquire),
        second_wins: second_wins.load(Ordering::Acquire),
        forfeits: forfeits.load(Ordering::Acquire),
    };

    info!(
        first_wins = result.first_wins,
        second_wins = result.second_wins,
        forfeits = result.forfeits,
        "tournament finished"
    );

    result
}

/*====================================================================================================================*/
