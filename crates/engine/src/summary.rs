use scorekeeper_core::MatchState;

/// Set-by-set line such as "6-0 7-6(5) 2-1": completed sets in order, a
/// tie-break set annotated with the loser's tie-break points, then the live
/// set if either side has a game in it.
pub fn format_set_summary(state: &MatchState) -> String {
    let mut parts: Vec<String> = state
        .completed_sets
        .iter()
        .map(|set| match set.loser_tie_break() {
            Some(loser_tb) => format!("{}-{}({})", set.left_games(), set.right_games(), loser_tb),
            None => format!("{}-{}", set.left_games(), set.right_games()),
        })
        .collect();

    let (gl, gr) = (state.left.games, state.right.games);
    if gl != 0 || gr != 0 {
        parts.push(format!("{gl}-{gr}"));
    }

    parts.join(" ")
}
