use std::sync::mpsc;
use std::time::Duration;

use interview_engine::{Debouncer, EngineEvent};
use tokio::runtime::Handle;

const QUIET: Duration = Duration::from_millis(750);

fn drain(rx: &mpsc::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    rx.try_iter().collect()
}

#[tokio::test(start_paused = true)]
async fn only_latest_of_rapid_schedules_fires() {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = Debouncer::new(Handle::current(), tx);

    for ticket in 1..=5 {
        debouncer.schedule(ticket, QUIET);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(drain(&rx).is_empty());

    tokio::time::sleep(QUIET).await;
    assert_eq!(drain(&rx), vec![EngineEvent::DebounceElapsed { ticket: 5 }]);
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_before_quiet_period() {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = Debouncer::new(Handle::current(), tx);

    debouncer.schedule(1, QUIET);
    tokio::time::sleep(QUIET - Duration::from_millis(1)).await;
    assert!(drain(&rx).is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(drain(&rx).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_prevents_firing() {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = Debouncer::new(Handle::current(), tx);

    debouncer.schedule(1, QUIET);
    tokio::time::sleep(Duration::from_millis(10)).await;
    debouncer.cancel();
    tokio::time::sleep(QUIET * 2).await;
    assert!(drain(&rx).is_empty());
}
