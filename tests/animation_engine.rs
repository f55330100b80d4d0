//! Timing behavior of the typewriter engine under paused tokio time.

mod common;

use common::{after, recording_animator};
use helios::animation::AnimationPhase;

fn rank(phase: AnimationPhase) -> u8 {
    match phase {
        AnimationPhase::Clearing => 0,
        AnimationPhase::Delaying => 1,
        AnimationPhase::Writing => 2,
        AnimationPhase::Idle => 3,
    }
}

#[tokio::test(start_paused = true)]
async fn types_one_char_per_write_period_on_empty_buffer() {
    let (animator, _surface) = recording_animator();

    animator.request_write("hey".to_string()).unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Writing);
    assert_eq!(animator.text(), "");

    after(60).await;
    assert_eq!(animator.text(), "h");
    after(50).await;
    assert_eq!(animator.text(), "he");
    after(50).await;
    assert_eq!(animator.text(), "hey");
    assert_eq!(animator.phase(), AnimationPhase::Idle);
    assert_eq!(animator.snapshot().target, None);
}

#[tokio::test(start_paused = true)]
async fn hello_on_empty_console_settles_in_five_write_periods() {
    let (animator, surface) = recording_animator();
    animator.request_write("hello".to_string()).unwrap();

    after(240).await;
    assert_eq!(animator.text(), "hell");
    assert_eq!(animator.phase(), AnimationPhase::Writing);

    after(20).await;
    assert_eq!(animator.text(), "hello");
    assert_eq!(animator.phase(), AnimationPhase::Idle);
    assert!(surface.frames().iter().all(|frame| "hello".starts_with(frame.as_str())));
}

#[tokio::test(start_paused = true)]
async fn clears_then_delays_then_writes() {
    let (animator, surface) = recording_animator();
    animator.request_write("hi".to_string()).unwrap();
    animator.settled().await;
    assert_eq!(animator.text(), "hi");

    animator.request_write("bye".to_string()).unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Clearing);
    assert_eq!(animator.snapshot().target.as_deref(), Some("bye"));

    after(100).await;
    assert_eq!(animator.text(), "h");
    assert_eq!(animator.phase(), AnimationPhase::Clearing);

    after(100).await; // t = 200
    assert_eq!(animator.text(), "");
    assert_eq!(animator.phase(), AnimationPhase::Delaying);

    after(400).await; // t = 600
    assert_eq!(animator.text(), "");
    assert_eq!(animator.phase(), AnimationPhase::Delaying);

    after(75).await; // t = 675
    assert_eq!(animator.phase(), AnimationPhase::Writing);
    assert_eq!(animator.text(), "");

    after(50).await; // t = 725
    assert_eq!(animator.text(), "b");
    after(50).await; // t = 775
    assert_eq!(animator.text(), "by");
    after(50).await; // t = 825
    assert_eq!(animator.text(), "bye");
    assert_eq!(animator.phase(), AnimationPhase::Idle);

    let frames = surface.frames();
    let tail: Vec<&str> = frames[frames.len() - 6..].iter().map(String::as_str).collect();
    assert_eq!(tail, ["hi", "h", "", "b", "by", "bye"]);
}

#[tokio::test(start_paused = true)]
async fn pure_clear_removes_one_char_per_clear_period() {
    let (animator, _surface) = recording_animator();
    animator.request_write("abc".to_string()).unwrap();
    animator.settled().await;

    animator.request_clear().unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Clearing);
    assert_eq!(animator.snapshot().target, None);

    after(80).await;
    assert_eq!(animator.text(), "ab");
    after(75).await;
    assert_eq!(animator.text(), "a");
    after(75).await;
    assert_eq!(animator.text(), "");
    assert_eq!(animator.phase(), AnimationPhase::Idle);

    after(1000).await;
    assert_eq!(animator.text(), "");
}

#[tokio::test(start_paused = true)]
async fn buffer_is_always_a_prefix_and_phases_move_forward() {
    let (animator, _surface) = recording_animator();
    animator.request_write("hello".to_string()).unwrap();
    animator.settled().await;

    animator.request_write("world".to_string()).unwrap();

    let mut previous = animator.snapshot();
    loop {
        after(10).await;
        let current = animator.snapshot();

        assert!(
            "hello".starts_with(&current.buffer) || "world".starts_with(&current.buffer),
            "unexpected buffer {:?}",
            current.buffer
        );
        assert!(rank(current.phase) >= rank(previous.phase));

        let (was, now) = (previous.buffer.len(), current.buffer.len());
        match current.phase {
            AnimationPhase::Clearing | AnimationPhase::Delaying => assert!(now <= was),
            AnimationPhase::Writing | AnimationPhase::Idle => {
                if previous.phase == AnimationPhase::Writing {
                    assert!(now >= was);
                }
            }
        }

        if current.phase == AnimationPhase::Idle {
            break;
        }
        previous = current;
    }
    assert_eq!(animator.text(), "world");
}

#[tokio::test(start_paused = true)]
async fn interrupted_clear_never_resumes_old_sequence() {
    let (animator, surface) = recording_animator();
    animator.request_write("abcdefghij".to_string()).unwrap();
    animator.settled().await;

    animator.request_write("XYZ".to_string()).unwrap();
    after(310).await;
    assert_eq!(animator.text(), "abcdef");

    animator.request_write("new".to_string()).unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Clearing);
    assert_eq!(animator.snapshot().target.as_deref(), Some("new"));

    // The superseded ticker would have fired 65ms in; nothing may change.
    after(70).await;
    assert_eq!(animator.text(), "abcdef");
    after(10).await;
    assert_eq!(animator.text(), "abcde");

    animator.settled().await;
    assert_eq!(animator.text(), "new");
    assert!(surface.frames().iter().all(|frame| !frame.contains('X')));
}

#[tokio::test(start_paused = true)]
async fn write_during_write_clears_the_partial_text() {
    let (animator, _surface) = recording_animator();
    animator.request_write("hello".to_string()).unwrap();
    after(125).await;
    assert_eq!(animator.text(), "he");

    animator.request_write("yo".to_string()).unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Clearing);

    after(160).await;
    assert_eq!(animator.text(), "");
    assert_eq!(animator.phase(), AnimationPhase::Delaying);

    animator.settled().await;
    assert_eq!(animator.text(), "yo");
}

#[tokio::test(start_paused = true)]
async fn clear_during_delay_ends_idle_and_empty() {
    let (animator, _surface) = recording_animator();
    animator.request_write("hi".to_string()).unwrap();
    animator.settled().await;

    animator.request_write("bye".to_string()).unwrap();
    after(300).await;
    assert_eq!(animator.phase(), AnimationPhase::Delaying);

    animator.request_clear().unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Idle);
    assert_eq!(animator.snapshot().target, None);

    after(2000).await;
    assert_eq!(animator.text(), "");
}

#[tokio::test(start_paused = true)]
async fn dropping_the_animator_stops_the_sequence() {
    let (animator, surface) = recording_animator();
    animator.request_write("abcdef".to_string()).unwrap();
    after(110).await;
    drop(animator);

    let shown = surface.frames().len();
    after(1000).await;
    assert_eq!(surface.frames().len(), shown);
    assert_eq!(surface.last().as_deref(), Some("ab"));
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_the_final_idle_phase() {
    let (animator, _surface) = recording_animator();
    let mut phases = animator.subscribe();
    assert_eq!(*phases.borrow_and_update(), AnimationPhase::Idle);

    animator.request_write("ok".to_string()).unwrap();
    assert!(phases.has_changed().unwrap());
    assert_eq!(*phases.borrow_and_update(), AnimationPhase::Writing);

    phases
        .wait_for(|phase| *phase == AnimationPhase::Idle)
        .await
        .unwrap();
    assert_eq!(animator.text(), "ok");
}

#[tokio::test(start_paused = true)]
async fn whitespace_write_sent_to_engine_is_a_clear() {
    let (animator, surface) = recording_animator();
    animator.request_write("hi".to_string()).unwrap();
    animator.settled().await;

    animator.request_write("   ".to_string()).unwrap();
    assert_eq!(animator.phase(), AnimationPhase::Clearing);
    assert_eq!(animator.snapshot().target, None);

    animator.settled().await;
    assert_eq!(animator.text(), "");
    assert!(surface.frames().iter().all(|frame| frame.trim() == frame.as_str()));
}

#[tokio::test(start_paused = true)]
async fn only_buffer_changes_reach_the_surface() {
    let (animator, surface) = recording_animator();
    animator.request_write("ab".to_string()).unwrap();
    animator.settled().await;
    animator.request_write("c".to_string()).unwrap();
    animator.settled().await;

    assert_eq!(surface.frames(), ["a", "ab", "a", "", "c"]);
}

#[tokio::test(start_paused = true)]
async fn zero_periods_still_complete() {
    let surface = std::sync::Arc::new(common::RecordingSurface::default());
    let dyn_surface: std::sync::Arc<dyn helios::animation::ConsoleSurface> = surface.clone();
    let timing = helios::animation::AnimationTiming {
        clear_period: std::time::Duration::ZERO,
        write_period: std::time::Duration::ZERO,
        start_delay: std::time::Duration::ZERO,
    };
    let animator = helios::animation::TextAnimator::new(dyn_surface, timing);

    animator.request_write("abc".to_string()).unwrap();
    animator.settled().await;
    animator.request_write("xy".to_string()).unwrap();
    animator.settled().await;

    assert_eq!(animator.text(), "xy");
    assert_eq!(surface.last().as_deref(), Some("xy"));
}
