use scorekeeper_core::{MatchRules, Sport};
use scorekeeper_harness::{TestDevice, play_game, play_games};

#[test]
fn live_summary_across_sets() -> Result<(), Box<dyn std::error::Error>> {
    let mut device = TestDevice::new()?;
    let session = &mut device.session;
    session.start_match_with_rules(
        MatchRules::new(Sport::Tennis).with_sets_to_win(3),
        "A",
        "B",
    );

    play_games(session, true, 6);
    for _ in 0..6 {
        play_game(session, true);
        play_game(session, false);
    }
    for _ in 0..5 {
        session.add_point_left();
        session.add_point_right();
    }
    session.add_point_left();
    session.add_point_left();
    play_games(session, true, 2);
    play_game(session, false);

    let ui = session.ui_state();
    assert_eq!(ui.set_summary, "6-0 7-6(5) 2-1");
    assert_eq!((ui.left_sets, ui.right_sets), (2, 0));
    assert!(!ui.finished);
    assert!(session.history().is_empty());
    Ok(())
}

#[test]
fn padel_golden_point_match() -> Result<(), Box<dyn std::error::Error>> {
    let mut device = TestDevice::new()?;
    let session = &mut device.session;
    session.start_match_with_rules(
        MatchRules::new(Sport::Padel).with_golden_point(true),
        "Ana & Bea",
        "Cris & Dani",
    );

    // One game through deuce: 40-40, then a single point decides it.
    for _ in 0..3 {
        session.add_point_left();
        session.add_point_right();
    }
    session.add_point_right();
    assert_eq!(session.ui_state().right_games, 1);
    assert_eq!(session.ui_state().point_labels(), ("0".to_string(), "0".to_string()));

    play_games(session, false, 11);
    let ui = session.ui_state();
    assert!(ui.finished);
    assert_eq!(ui.winner_name(), "Cris & Dani");

    let rec = &session.history()[0];
    assert_eq!(rec.result_line(), "Padel 0-2 (0-6 0-6)");
    Ok(())
}

#[test]
fn advantage_is_labelled_on_the_scoreboard() -> Result<(), Box<dyn std::error::Error>> {
    let mut device = TestDevice::new()?;
    let session = &mut device.session;
    for _ in 0..3 {
        session.add_point_left();
        session.add_point_right();
    }
    session.add_point_left();
    assert_eq!(session.ui_state().point_labels(), ("Ad".to_string(), "40".to_string()));

    session.add_point_right();
    assert_eq!(session.ui_state().point_labels(), ("40".to_string(), "40".to_string()));
    Ok(())
}
