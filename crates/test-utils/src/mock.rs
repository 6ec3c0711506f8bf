//! A scripted [`Transport`] for driving provider clients without a network.
//!
//! Routes match when their pattern is a substring of the request's display
//! URL (path plus query, secrets masked), checked in registration order.
//! A route replays its replies in order and then keeps repeating the last
//! one. Unmatched requests get a 404.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use providers::transport::{HttpRequest, HttpResponse, Transport};
use tokio::time::Instant;
use wx_common::{FetchError, FetchResult};

use crate::fixtures::load_fixture;

#[derive(Debug, Clone)]
pub enum MockReply {
    Response(HttpResponse),
    Error(FetchError),
    /// Never completes; only a timeout or cancellation ends the call.
    Hang,
}

impl MockReply {
    pub fn json(body: impl Into<String>) -> Self {
        MockReply::Response(HttpResponse::new(200, body.into()))
    }

    pub fn fixture(name: &str) -> Self {
        Self::json(load_fixture(name))
    }

    pub fn status(status: u16) -> Self {
        MockReply::Response(HttpResponse::new(status, format!("{{\"status\":{}}}", status)))
    }
}

#[derive(Debug)]
struct Route {
    pattern: String,
    replies: VecDeque<MockReply>,
    delay: Option<Duration>,
}

/// A request as seen by the mock, with the (possibly paused) clock time
/// it arrived at.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: HttpRequest,
    pub at: Instant,
}

#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route replying with `replies` in order.
    pub fn on_sequence(self, pattern: &str, replies: Vec<MockReply>) -> Self {
        self.push_route(pattern, replies, None);
        self
    }

    pub fn on(self, pattern: &str, reply: MockReply) -> Self {
        self.on_sequence(pattern, vec![reply])
    }

    /// Reply after `delay` has elapsed on the tokio clock.
    pub fn on_delayed(self, pattern: &str, reply: MockReply, delay: Duration) -> Self {
        self.push_route(pattern, vec![reply], Some(delay));
        self
    }

    fn push_route(&self, pattern: &str, replies: Vec<MockReply>, delay: Option<Duration>) {
        lock(&self.routes).push(Route {
            pattern: pattern.to_string(),
            replies: replies.into(),
            delay,
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Calls whose display URL contains `pattern`.
    pub fn calls_matching(&self, pattern: &str) -> Vec<RecordedCall> {
        lock(&self.calls)
            .iter()
            .filter(|c| c.request.display_url().contains(pattern))
            .cloned()
            .collect()
    }

    fn next_reply(&self, request: &HttpRequest) -> (MockReply, Option<Duration>) {
        let target = request.display_url();
        let mut routes = lock(&self.routes);
        match routes.iter_mut().find(|r| target.contains(&r.pattern)) {
            Some(route) => {
                let reply = if route.replies.len() > 1 {
                    route.replies.pop_front()
                } else {
                    route.replies.front().cloned()
                };
                (reply.unwrap_or_else(|| MockReply::status(404)), route.delay)
            }
            None => (MockReply::status(404), None),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> FetchResult<HttpResponse> {
        lock(&self.calls).push(RecordedCall {
            request: request.clone(),
            at: Instant::now(),
        });

        let (reply, delay) = self.next_reply(request);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            MockReply::Response(response) => Ok(response),
            MockReply::Error(err) => Err(err),
            MockReply::Hang => {
                std::future::pending::<()>().await;
                Err(FetchError::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sequence_then_repeat_last() {
        let mock = MockTransport::new().on_sequence(
            "/weather",
            vec![MockReply::status(429), MockReply::json("{}")],
        );
        let req = HttpRequest::get("https://api.example.com/weather");

        assert_eq!(mock.send(&req).await.unwrap().status, 429);
        assert_eq!(mock.send(&req).await.unwrap().status, 200);
        assert_eq!(mock.send(&req).await.unwrap().status, 200);
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_matches_on_query() {
        let mock = MockTransport::new()
            .on("parameterId=wind_dir", MockReply::status(500))
            .on("/items", MockReply::json("{}"));

        let dir = HttpRequest::get("https://x/items").query("parameterId", "wind_dir");
        let speed = HttpRequest::get("https://x/items").query("parameterId", "wind_speed");
        assert_eq!(mock.send(&dir).await.unwrap().status, 500);
        assert_eq!(mock.send(&speed).await.unwrap().status, 200);
        assert_eq!(mock.calls_matching("wind_dir").len(), 1);
    }

    #[tokio::test]
    async fn test_unmatched_is_404() {
        let mock = MockTransport::new();
        let resp = mock.send(&HttpRequest::get("https://nowhere")).await.unwrap();
        assert_eq!(resp.status, 404);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_uses_tokio_clock() {
        let mock = MockTransport::new().on_delayed(
            "/slow",
            MockReply::json("{}"),
            Duration::from_secs(30),
        );
        let start = Instant::now();
        mock.send(&HttpRequest::get("https://x/slow")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(30));
    }
}
