//! Score rules.
//!
//! Every lock scores: 1 point when nothing cleared, (k+1)^2 when k rows
//! cleared. No level multiplier; the score is a plain running total.

/// Points awarded for a lock that cleared `rows_cleared` rows.
pub fn lock_score(rows_cleared: usize) -> u32 {
    if rows_cleared == 0 {
        1
    } else {
        let k = rows_cleared as u32 + 1;
        k * k
    }
}
