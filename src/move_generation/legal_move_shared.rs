use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::MoveTarget;

/// Wraps plain destination squares as regular move targets.
#[inline]
pub fn push_regular(squares: Vec<Square>, out: &mut Vec<MoveTarget>) {
    out.extend(squares.into_iter().map(MoveTarget::Regular));
}
