use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deal;
use crate::errors::InvalidHand;
use crate::hand::{classify, Category};

/// A seat's result after every player is classified against the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub seat: usize,
    pub hole: [Card; 2],
    pub category: Category,
}

/// Orders players strongest category first.
///
/// Players with the same category keep their seat order; no kicker is used to
/// separate them.
pub fn rank_players(deal: &Deal) -> Result<Vec<Standing>, InvalidHand> {
    let mut standings = deal
        .players
        .iter()
        .enumerate()
        .map(|(seat, hole)| {
            Ok(Standing {
                seat,
                hole: *hole,
                category: classify(hole, &deal.table)?,
            })
        })
        .collect::<Result<Vec<_>, InvalidHand>>()?;

    // stable: ties stay in seat order
    standings.sort_by_key(|s| s.category);
    debug!(
        players = standings.len(),
        best = ?standings.first().map(|s| s.category),
        "ranked players"
    );
    Ok(standings)
}

/// Seats sharing the strongest category.
pub fn leaders(standings: &[Standing]) -> Vec<usize> {
    let Some(best) = standings.first().map(|s| s.category) else {
        return vec![];
    };
    standings
        .iter()
        .take_while(|s| s.category == best)
        .map(|s| s.seat)
        .collect()
}
