use std::sync::{Arc, Mutex};

use super::*;

fn test_client() -> IdentityClient {
    IdentityClient::new(IdentityConfig {
        api_key: "test-key",
        auth_domain: "demo.example.app",
    })
}

fn recording_subscriber(client: &IdentityClient) -> (u64, Arc<Mutex<Vec<Option<UserIdentity>>>>) {
    let events: Arc<Mutex<Vec<Option<UserIdentity>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let id = client.subscribe(move |user| {
        sink.lock().expect("event sink").push(user);
    });
    (id, events)
}

#[test]
fn fresh_client_has_no_user() {
    let client = test_client();
    assert_eq!(client.current_user(), None);
}

#[test]
fn sign_out_notifies_subscribers_with_none() {
    let client = test_client();
    let (_, events) = recording_subscriber(&client);

    client.sign_out();

    let events = events.lock().expect("event sink");
    assert_eq!(events.as_slice(), &[None]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let client = test_client();
    let (id, events) = recording_subscriber(&client);

    client.sign_out();
    client.unsubscribe(id);
    client.sign_out();

    assert_eq!(events.lock().expect("event sink").len(), 1);
}

#[test]
fn unsubscribe_unknown_id_is_a_no_op() {
    let client = test_client();
    let (_, events) = recording_subscriber(&client);

    client.unsubscribe(999);
    client.sign_out();

    assert_eq!(events.lock().expect("event sink").len(), 1);
}

#[test]
fn subscribers_fire_in_registration_order() {
    let client = test_client();
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let first = order.clone();
    client.subscribe(move |_| first.lock().expect("order sink").push("first"));
    let second = order.clone();
    client.subscribe(move |_| second.lock().expect("order sink").push("second"));

    client.sign_out();

    assert_eq!(order.lock().expect("order sink").as_slice(), &["first", "second"]);
}

#[test]
fn subscriber_ids_are_unique_across_removal() {
    let client = test_client();
    let a = client.subscribe(|_| {});
    client.unsubscribe(a);
    let b = client.subscribe(|_| {});
    assert_ne!(a, b);
}

fn far_future_credentials() -> StoredCredentials {
    StoredCredentials {
        uid: "u1".to_owned(),
        email: Some("a@b.com".to_owned()),
        id_token: "bearer-token".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_at_ms: f64::MAX,
    }
}

#[test]
fn current_user_reflects_injected_credentials() {
    let client = test_client();
    client.set_credentials_for_test(Some(far_future_credentials()));
    let user = client.current_user().expect("signed-in user");
    assert_eq!(user.uid, "u1");
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
}

#[test]
fn get_token_resolves_none_without_a_user() {
    let client = test_client();
    let token = poll_now(client.get_token());
    assert_eq!(token, None);
}

#[test]
fn get_token_returns_a_fresh_token_without_refreshing() {
    let client = test_client();
    client.set_credentials_for_test(Some(far_future_credentials()));
    let token = poll_now(client.get_token());
    assert_eq!(token.as_deref(), Some("bearer-token"));
}

/// Minimal executor for futures that never actually suspend in these tests.
fn poll_now<T>(future: impl std::future::Future<Output = T>) -> T {
    use std::pin::pin;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn noop_raw_waker() -> RawWaker {
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        fn noop(_: *const ()) {}
        RawWaker::new(std::ptr::null(), &RawWakerVTable::new(clone, noop, noop, noop))
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut context = Context::from_waker(&waker);
    let mut future = pin!(future);
    match future.as_mut().poll(&mut context) {
        Poll::Ready(value) => value,
        Poll::Pending => unreachable!("these futures resolve without suspending off-wasm"),
    }
}
