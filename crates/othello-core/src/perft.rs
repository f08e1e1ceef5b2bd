use crate::board::Board;
use crate::flip;
use crate::player::Player;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively. Passes do not consume depth.
///
/// # Returns
///
/// The number of leaf nodes reached. A finished game counts as one leaf.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Player::Black, depth)
}

/// Counts leaf nodes below `board` with `player` to move.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    let moves = flip::legal_moves(board, player);

    if moves.is_empty() {
        let opponent = player.opponent();
        return if flip::has_legal_move(board, opponent) {
            perft(board, opponent, depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return moves.count() as u64;
    }

    moves
        .iter()
        .map(|sq| {
            let mut next = *board;
            next.apply_move(sq, player, &flip::flips(board, sq, player));
            perft(&next, player.opponent(), depth - 1)
        })
        .sum()
}
