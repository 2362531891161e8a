use super::*;

#[test]
fn endpoint_joins_same_origin_path() {
    assert_eq!(endpoint("", "/api/auth/me"), "/api/auth/me");
}

#[test]
fn endpoint_strips_trailing_slash_from_base() {
    assert_eq!(endpoint("https://lib.example/", "/api/auth/logout"), "https://lib.example/api/auth/logout");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_is_unavailable_off_browser() {
    let result = block_on(login("", "a@b.com", "pw"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Minimal executor for the non-hydrate stubs, which never actually await.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
