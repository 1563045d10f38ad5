use super::*;

// ============================================================================
// Directive decisions
// ============================================================================

#[test]
fn first_unauthorized_begins_a_refresh() {
    let mut coordinator: RefreshCoordinator<u32> = RefreshCoordinator::new();
    assert!(!coordinator.is_refreshing());
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Begin);
    assert!(coordinator.is_refreshing());
}

#[test]
fn concurrent_unauthorized_requests_share_one_refresh() {
    let mut coordinator: RefreshCoordinator<u32> = RefreshCoordinator::new();

    // Five requests hit a 401 while the coordinator is idle. Only the first
    // starts a refresh; the rest park behind it.
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Begin);
    for request in 1..5 {
        assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Wait);
        coordinator.park(request);
    }
    assert_eq!(coordinator.parked(), 4);

    let drained = coordinator.complete();
    assert_eq!(drained, vec![1, 2, 3, 4]);
    assert!(!coordinator.is_refreshing());
}

#[test]
fn already_retried_requests_pass_through() {
    let mut coordinator: RefreshCoordinator<u32> = RefreshCoordinator::new();

    // Terminal regardless of coordinator state.
    assert_eq!(coordinator.on_unauthorized(true), RefreshDirective::PassThrough);
    assert!(!coordinator.is_refreshing());

    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Begin);
    assert_eq!(coordinator.on_unauthorized(true), RefreshDirective::PassThrough);
    assert_eq!(coordinator.parked(), 0);
}

// ============================================================================
// Draining
// ============================================================================

#[test]
fn complete_drains_each_waiter_exactly_once() {
    let mut coordinator: RefreshCoordinator<&str> = RefreshCoordinator::new();
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Begin);
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Wait);
    coordinator.park("profile");
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Wait);
    coordinator.park("posts");

    assert_eq!(coordinator.complete(), vec!["profile", "posts"]);
    // A second drain yields nothing: failure fan-out cannot double-fire.
    assert_eq!(coordinator.complete(), Vec::<&str>::new());
}

#[test]
fn coordinator_returns_to_idle_after_completion() {
    let mut coordinator: RefreshCoordinator<u32> = RefreshCoordinator::new();
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Begin);
    coordinator.complete();

    // A later 401 starts a fresh cycle with an empty queue.
    assert_eq!(coordinator.on_unauthorized(false), RefreshDirective::Begin);
    assert_eq!(coordinator.parked(), 0);
}

#[test]
fn parking_while_idle_drops_the_waiter() {
    let mut coordinator: RefreshCoordinator<u32> = RefreshCoordinator::new();
    coordinator.park(7);
    assert_eq!(coordinator.parked(), 0);
    assert_eq!(coordinator.complete(), Vec::<u32>::new());
}
