use std::time::Duration;
use tokio::time::sleep;

use sobriety_timer::{
    display::{RecordingLabel, WatchLabel},
    run_screen, ScreenHandle, TimerScreen, TimerState,
};

const SECOND: Duration = Duration::from_secs(1);

fn spawn_screen(
    interval: Duration,
) -> (ScreenHandle, tokio::task::JoinHandle<TimerScreen<RecordingLabel>>) {
    let screen = TimerScreen::create(RecordingLabel::new(), interval);
    let (handle, events) = ScreenHandle::channel();
    (handle, tokio::spawn(run_screen(screen, events)))
}

#[tokio::test(start_paused = true)]
async fn shows_one_value_per_second() {
    let (handle, task) = spawn_screen(SECOND);

    handle.press_start().unwrap();
    sleep(Duration::from_millis(3500)).await;
    handle.destroy().unwrap();

    let screen = task.await.unwrap();
    assert_eq!(screen.display().texts, vec!["00:00", "00:01", "00:02", "00:03"]);
    assert_eq!(screen.state(), TimerState { elapsed_seconds: 4, running: false });
}

#[tokio::test(start_paused = true)]
async fn nothing_shows_until_start() {
    let (handle, task) = spawn_screen(SECOND);

    sleep(10 * SECOND).await;
    handle.press_start().unwrap();
    sleep(Duration::from_millis(2500)).await;
    handle.destroy().unwrap();

    let screen = task.await.unwrap();
    assert_eq!(screen.display().texts, vec!["00:00", "00:01", "00:02"]);
}

#[tokio::test(start_paused = true)]
async fn repeated_taps_do_not_reset() {
    let (handle, task) = spawn_screen(SECOND);

    handle.press_start().unwrap();
    handle.press_start().unwrap();
    sleep(Duration::from_millis(1500)).await;
    handle.press_start().unwrap();
    sleep(SECOND).await;
    handle.destroy().unwrap();

    let screen = task.await.unwrap();
    assert_eq!(screen.display().texts, vec!["00:00", "00:01", "00:02"]);
    assert_eq!(screen.state().elapsed_seconds, 3);
}

#[tokio::test(start_paused = true)]
async fn no_updates_after_destroy() {
    let (label, rx) = WatchLabel::new();
    let screen = TimerScreen::create(label, SECOND);
    let (handle, events) = ScreenHandle::channel();
    let task = tokio::spawn(run_screen(screen, events));

    handle.press_start().unwrap();
    sleep(Duration::from_millis(1500)).await;
    handle.destroy().unwrap();
    let screen = task.await.unwrap();

    sleep(60 * SECOND).await;
    assert_eq!(*rx.borrow(), "00:01");
    assert_eq!(screen.state(), TimerState { elapsed_seconds: 2, running: false });
    assert_eq!(screen.queue().pending(), 0);
    assert!(handle.press_start().is_err());
}

#[tokio::test(start_paused = true)]
async fn accelerated_interval() {
    let (handle, task) = spawn_screen(Duration::from_millis(250));

    handle.press_start().unwrap();
    sleep(Duration::from_millis(1100)).await;
    handle.destroy().unwrap();

    let screen = task.await.unwrap();
    assert_eq!(
        screen.display().texts,
        vec!["00:00", "00:01", "00:02", "00:03", "00:04"]
    );
}

#[tokio::test(start_paused = true)]
async fn loop_ends_when_target_is_reached() {
    let screen = TimerScreen::create(RecordingLabel::new(), SECOND).with_target(Some(3));
    let (handle, events) = ScreenHandle::channel();
    let task = tokio::spawn(run_screen(screen, events));

    handle.press_start().unwrap();
    let screen = task.await.unwrap();

    assert!(screen.is_completed());
    assert!(screen.is_destroyed());
    assert_eq!(screen.display().texts, vec!["00:00", "00:01", "00:02", "00:03"]);
    assert_eq!(screen.display().finished, Some(3));
    assert_eq!(screen.state(), TimerState { elapsed_seconds: 3, running: false });
    assert!(handle.press_start().is_err());
}

#[tokio::test(start_paused = true)]
async fn destroy_before_target_skips_the_finish_notice() {
    let screen = TimerScreen::create(RecordingLabel::new(), SECOND).with_target(Some(10));
    let (handle, events) = ScreenHandle::channel();
    let task = tokio::spawn(run_screen(screen, events));

    handle.press_start().unwrap();
    sleep(Duration::from_millis(2500)).await;
    handle.destroy().unwrap();

    let screen = task.await.unwrap();
    assert!(!screen.is_completed());
    assert_eq!(screen.display().finished, None);
    assert_eq!(screen.state(), TimerState { elapsed_seconds: 3, running: false });
}
