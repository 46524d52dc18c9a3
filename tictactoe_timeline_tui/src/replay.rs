//! Non-interactive replay of a move sequence.

use tictactoe_timeline::{GameState, PlayOutcome, Position, TimelineError};
use tracing::{debug, instrument};

/// Parses move arguments into positions.
///
/// Each argument may hold several moves separated by commas, so
/// `["0,4", "top-right"]` yields three positions.
#[instrument]
pub fn parse_moves(args: &[String]) -> Result<Vec<Position>, TimelineError> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse::<Position>)
        .collect()
}

/// Plays `moves` from an empty game and describes every snapshot.
///
/// Ignored plays are reported and skipped. With `jump`, the requested
/// snapshot is shown again at the end.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>) -> Result<String, TimelineError> {
    let mut game = GameState::new();
    let mut out = String::new();

    for (attempt, &pos) in moves.iter().enumerate() {
        match game.play(pos) {
            PlayOutcome::Placed { mark, position, .. } => {
                out.push_str(&format!(
                    "Move #{}: {} played {}\n",
                    game.current_move(),
                    mark,
                    position
                ));
                push_snapshot(&mut out, &game);
            }
            PlayOutcome::Ignored(reason) => {
                debug!(attempt, %reason, "Replay step ignored");
                out.push_str(&format!("Play {} ignored: {}\n\n", attempt + 1, reason));
            }
        }
    }

    out.push_str(&format!(
        "Final: {} after {} move(s)\n",
        game.status(),
        game.current_move()
    ));

    if let Some(mv) = jump {
        game.try_jump_to(mv)?;
        out.push('\n');
        out.push_str(&format!("Go to move #{}:\n", mv));
        push_snapshot(&mut out, &game);
    }

    Ok(out)
}

fn push_snapshot(out: &mut String, game: &GameState) {
    out.push_str(&game.current_board().to_string());
    out.push('\n');
    out.push_str(&game.status().to_string());
    out.push_str("\n\n");
}
