use crate::{ShutdownCoordinator, ShutdownGuard};

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_coordinator_when_shutdown_triggered_then_subscribers_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = ShutdownGuard::new(&coordinator);

    let coord_clone = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        coord_clone.shutdown();
    });

    let result = timeout(Duration::from_millis(500), guard.wait()).await;
    assert!(result.is_ok(), "Shutdown signal should be received");
}

#[tokio::test]
async fn given_multiple_subscribers_when_shutdown_then_all_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard1 = ShutdownGuard::new(&coordinator);
    let mut guard2 = coordinator.subscribe_guard();

    coordinator.shutdown();

    let result1 = timeout(Duration::from_millis(50), guard1.wait()).await;
    let result2 = timeout(Duration::from_millis(50), guard2.wait()).await;

    assert!(result1.is_ok());
    assert!(result2.is_ok());
}

#[tokio::test]
async fn given_shutdown_already_triggered_when_guard_created_later_then_wait_returns() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.shutdown();

    let mut late_guard = coordinator.subscribe_guard();
    let result = timeout(Duration::from_millis(50), late_guard.wait()).await;

    assert!(result.is_ok());
    assert!(late_guard.poll_shutdown());
}

#[test]
fn given_new_coordinator_when_checked_then_not_shutdown() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = ShutdownGuard::new(&coordinator);

    assert!(!coordinator.is_shutdown());
    assert!(!guard.poll_shutdown());
}

#[test]
fn given_shutdown_called_twice_when_checked_then_still_shutdown() {
    let coordinator = ShutdownCoordinator::new();

    coordinator.shutdown();
    coordinator.shutdown();

    assert!(coordinator.is_shutdown());
}
