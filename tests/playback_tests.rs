// Playback controller behaviour driven by an explicit clock

use algoviz::playback::{PlaybackController, PlaybackState, Speed, Tick};
use proptest::prelude::*;
use std::time::{Duration, Instant};

const BASE: Duration = Duration::from_millis(1000);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_autoplay_visits_every_index_once() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(5, BASE);
    pc.play(t0);

    let mut visited = vec![pc.current_index()];
    let mut now = t0;
    while pc.is_playing() {
        now += BASE;
        match pc.poll(now) {
            Tick::Advanced(idx) => visited.push(idx),
            other => panic!("unexpected {:?} at {:?}", other, now - t0),
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert_eq!(pc.state(), PlaybackState::Paused);
    assert_eq!(pc.poll(now + BASE * 10), Tick::Idle);
    assert_eq!(pc.current_index(), 4);
}

#[test]
fn test_tick_is_not_early() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(3, BASE);
    pc.play(t0);
    assert_eq!(pc.poll(t0 + ms(999)), Tick::Idle);
    assert_eq!(pc.poll(t0 + ms(1000)), Tick::Advanced(1));
}

#[test]
fn test_seek_bounds() {
    let mut pc = PlaybackController::new(3, BASE);
    assert!(!pc.step_backward());
    assert_eq!(pc.current_index(), 0);

    pc.jump_to_end();
    assert!(!pc.step_forward());
    assert_eq!(pc.current_index(), 2);

    assert!(pc.step_backward());
    assert_eq!(pc.current_index(), 1);
}

#[test]
fn test_blocked_seek_keeps_playing() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(5, BASE);
    pc.play(t0);
    let token = pc.pending_token();

    assert!(!pc.step_backward());
    assert!(pc.is_playing());
    assert_eq!(pc.pending_token(), token);
    assert_eq!(pc.current_index(), 0);
    assert_eq!(pc.poll(t0 + BASE), Tick::Advanced(1));
}

#[test]
fn test_reaching_last_step_pauses() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(3, BASE);
    pc.play(t0);
    assert_eq!(pc.poll(t0 + BASE), Tick::Advanced(1));
    assert!(pc.is_playing());
    assert_eq!(pc.poll(t0 + BASE * 2), Tick::Advanced(2));
    assert!(!pc.is_playing());
    assert_eq!(pc.pending_token(), None);

    // space at the end replays rather than toggling
    pc.play(t0 + BASE * 2);
    assert!(pc.is_playing());
    assert_eq!(pc.current_index(), 0);
}

#[test]
fn test_manual_step_pauses_playback() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(4, BASE);
    pc.play(t0);
    assert!(pc.step_forward());
    assert!(!pc.is_playing());
    assert_eq!(pc.pending_token(), None);
    assert_eq!(pc.poll(t0 + BASE), Tick::Idle);
    assert_eq!(pc.current_index(), 1);
}

#[test]
fn test_play_toggles_and_replays_from_end() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(3, BASE);
    pc.play(t0);
    assert!(pc.is_playing());
    pc.play(t0);
    assert!(!pc.is_playing());

    pc.jump_to_end();
    pc.play(t0);
    assert!(pc.is_playing());
    assert_eq!(pc.current_index(), 0);
}

#[test]
fn test_install_resets_and_cancels() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(6, BASE);
    pc.play(t0);
    pc.poll(t0 + BASE);
    let stale = pc.pending_token().expect("pending tick while playing");

    pc.install(3, ms(2000));
    assert_eq!(pc.current_index(), 0);
    assert_eq!(pc.state(), PlaybackState::Paused);
    assert_eq!(pc.len(), 3);
    assert_eq!(pc.fire(stale, t0 + BASE * 5), Tick::Idle);
    assert_eq!(pc.current_index(), 0);
}

#[test]
fn test_stale_token_after_pause_and_resume() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(5, BASE);
    pc.play(t0);
    let first = pc.pending_token().expect("pending tick");
    pc.pause();
    pc.play(t0 + ms(10));
    let second = pc.pending_token().expect("pending tick");

    assert_ne!(first, second);
    assert_eq!(pc.fire(first, t0 + BASE * 3), Tick::Idle);
    assert_eq!(pc.current_index(), 0);
    assert_eq!(pc.fire(second, t0 + BASE * 3), Tick::Advanced(1));
}

#[test]
fn test_speed_change_reschedules() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(5, BASE);
    pc.play(t0);
    let before = pc.pending_token();

    pc.set_speed(Speed::DOUBLE, t0 + ms(900));
    assert_ne!(pc.pending_token(), before);
    assert_eq!(pc.next_due(), Some(t0 + ms(1400)));
    assert_eq!(pc.poll(t0 + ms(1000)), Tick::Idle);
    assert_eq!(pc.poll(t0 + ms(1400)), Tick::Advanced(1));
    assert_eq!(pc.interval(), ms(500));
}

#[test]
fn test_speed_change_while_paused_keeps_state() {
    let t0 = Instant::now();
    let mut pc = PlaybackController::new(5, BASE);
    pc.set_speed(Speed::HALF, t0);
    assert!(!pc.is_playing());
    assert_eq!(pc.pending_token(), None);
    assert_eq!(pc.interval(), ms(2000));
}

#[test]
fn test_zero_length_is_clamped() {
    let pc = PlaybackController::new(0, BASE);
    assert_eq!(pc.len(), 1);
    assert!(pc.is_at_start() && pc.is_at_end());
}

proptest! {
    #[test]
    fn prop_autoplay_is_monotonic(len in 1usize..40, speed_idx in 0usize..4) {
        let t0 = Instant::now();
        let mut pc = PlaybackController::new(len, BASE);
        pc.set_speed(Speed::PRESETS[speed_idx], t0);
        pc.play(t0);

        let mut now = t0;
        let mut last = 0;
        for _ in 0..len + 5 {
            now += pc.interval();
            match pc.poll(now) {
                Tick::Advanced(idx) => {
                    prop_assert_eq!(idx, last + 1);
                    last = idx;
                }
                Tick::Finished | Tick::Idle => {}
            }
        }
        prop_assert_eq!(last, len - 1);
        prop_assert!(!pc.is_playing());
    }

    #[test]
    fn prop_seeks_stay_in_bounds(len in 1usize..20, moves in prop::collection::vec(any::<bool>(), 0..60)) {
        let t0 = Instant::now();
        let mut pc = PlaybackController::new(len, BASE);
        for forward in moves {
            if len > 1 && !pc.is_playing() && !pc.is_at_end() {
                pc.play(t0);
            }
            let was_playing = pc.is_playing();
            let before = pc.current_index();
            let moved = if forward { pc.step_forward() } else { pc.step_backward() };
            prop_assert!(pc.current_index() < len);
            prop_assert_eq!(moved, pc.current_index() != before);
            if moved {
                prop_assert!(!pc.is_playing());
            } else {
                prop_assert_eq!(pc.is_playing(), was_playing);
            }
        }
    }
}
