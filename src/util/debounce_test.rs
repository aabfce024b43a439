use super::*;
use std::sync::atomic::AtomicU32;

const WINDOW: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn only_latest_debounced_call_fires() {
    let debouncer = Debouncer::new(WINDOW);
    let fired = Arc::new(AtomicU32::new(0));

    for _ in 0..5 {
        let fired = fired.clone();
        debouncer.call(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    tokio::time::sleep(WINDOW * 2).await;

    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn spaced_calls_each_fire() {
    let debouncer = Debouncer::new(WINDOW);
    let fired = Arc::new(AtomicU32::new(0));

    for _ in 0..3 {
        let fired = fired.clone();
        debouncer.call(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(WINDOW * 2).await;
    }

    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_before_the_window() {
    let debouncer = Debouncer::new(WINDOW);
    let fired = Arc::new(AtomicU32::new(0));

    {
        let fired = fired.clone();
        debouncer.call(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }
    tokio::time::sleep(WINDOW / 2).await;

    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn throttle_admits_leading_edge_only() {
    let throttle = Throttle::new(WINDOW);

    assert!(throttle.admit());
    assert!(!throttle.admit());
    assert!(!throttle.admit());
}

#[tokio::test(start_paused = true)]
async fn throttle_reopens_after_window() {
    let throttle = Throttle::new(WINDOW);

    assert!(throttle.admit());
    tokio::time::sleep(WINDOW / 2).await;
    assert!(!throttle.admit());
    tokio::time::sleep(WINDOW).await;
    assert!(throttle.admit());
}
