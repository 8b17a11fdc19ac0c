// Session: input changes, playback reset and highlighted lines together

use algoviz::algorithms::input::parse_sequence;
use algoviz::algorithms::{Input, Problem};
use algoviz::highlight::Language;
use algoviz::playback::{PlaybackState, Speed, Tick};
use algoviz::session::Session;
use std::time::{Duration, Instant};

#[test]
fn test_new_input_resets_playing_session() {
    let t0 = Instant::now();
    let mut session = Session::with_default_input(Problem::Kadane);
    session.play(t0);
    session.poll(t0 + Duration::from_secs(1));
    session.poll(t0 + Duration::from_secs(2));
    assert_eq!(session.controller().current_index(), 2);

    session.set_input(Input::new(parse_sequence("5, -9, 6").unwrap()));
    assert_eq!(session.controller().current_index(), 0);
    assert_eq!(session.controller().state(), PlaybackState::Paused);
    assert_eq!(session.poll(t0 + Duration::from_secs(30)), Tick::Idle);
    assert_eq!(session.current_step().state.array(), &[5, -9, 6]);
}

#[test]
fn test_speed_survives_input_change() {
    let mut session = Session::with_default_input(Problem::TwoSum);
    session.set_speed(Speed::DOUBLE, Instant::now());
    session.set_input(Input::new(vec![3, 3]).with_scalar(6));
    assert_eq!(session.controller().speed(), Speed::DOUBLE);
}

#[test]
fn test_union_intersection_plays_slower() {
    let session = Session::with_default_input(Problem::UnionIntersection);
    assert_eq!(session.controller().interval(), Duration::from_millis(2000));
    let session = Session::with_default_input(Problem::Kadane);
    assert_eq!(session.controller().interval(), Duration::from_millis(1000));
}

#[test]
fn test_highlight_tracks_the_current_step() {
    let mut session = Session::with_default_input(Problem::TwoSum);
    session.set_language(Language::Java);
    let mut lines = Vec::new();
    loop {
        lines.push(session.highlighted_line());
        if !session.step_forward() {
            break;
        }
    }
    assert_eq!(lines.len(), session.trace().len());
    assert!(lines.iter().all(Option::is_some));
    // the found step and the return step sit on different lines
    let n = lines.len();
    assert_ne!(lines[n - 2], lines[n - 1]);
}

#[test]
fn test_switching_problem_loads_its_defaults() {
    let mut session = Session::with_default_input(Problem::TwoSum);
    session.jump_to_end();
    session.set_problem(Problem::MinJumps);
    assert_eq!(session.problem(), Problem::MinJumps);
    assert_eq!(session.input().nums, vec![2, 3, 1, 1, 4]);
    assert!(session.controller().is_at_start());
}
