#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Sender};
    use std::time::Duration;

    use futures::future::BoxFuture;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::history::HistoryState;
    use crate::place::Place;
    use crate::suggest::{
        EngineOptions, LookupOutcome, LookupRequest, LookupResponse, LookupResult, PlaceSource,
        SuggestEngine,
    };

    pub fn place(city: &str, region: Option<&str>, country: &str) -> Place {
        Place {
            city: city.to_string(),
            region: region.map(str::to_string),
            country: country.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: "UTC".to_string(),
        }
    }

    pub fn paris() -> Place {
        Place {
            city: "Paris".to_string(),
            region: Some("Île-de-France".to_string()),
            country: "France".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            timezone: "Europe/Paris".to_string(),
        }
    }

    pub fn paris_tx() -> Place {
        Place {
            city: "Paris (TX)".to_string(),
            region: Some("Texas".to_string()),
            country: "United States".to_string(),
            latitude: 33.6609,
            longitude: -95.5555,
            timezone: "America/Chicago".to_string(),
        }
    }

    /// Engine wired to test-owned channels instead of a worker thread
    pub struct EngineHarness {
        pub engine: SuggestEngine,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl EngineHarness {
        /// Drain every request the engine has issued so far
        pub fn issued(&mut self) -> Vec<LookupRequest> {
            let mut issued = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                issued.push(request);
            }
            issued
        }

        /// Answer `request_id` and let the engine reconcile it
        pub fn respond(&mut self, request_id: u64, result: LookupResult) -> usize {
            // Send fails only after shutdown, which tests check separately
            let _ = self.responses.send(LookupResponse { request_id, result });
            self.engine.poll_responses()
        }
    }

    pub fn engine_harness() -> EngineHarness {
        engine_harness_with(EngineOptions::default())
    }

    pub fn engine_harness_with(options: EngineOptions) -> EngineHarness {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        EngineHarness {
            engine: SuggestEngine::new(options, request_tx, response_rx),
            requests,
            responses,
        }
    }

    /// Scripted place source with per-query delay and result
    #[derive(Default)]
    pub struct FakeSource {
        scripted: HashMap<String, (Duration, LookupResult)>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, query: &str, delay: Duration, result: LookupResult) -> Self {
            self.scripted.insert(query.to_string(), (delay, result));
            self
        }

        pub fn calls(&self) -> Vec<(String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PlaceSource for FakeSource {
        fn lookup<'a>(&'a self, query: &'a str, count: usize) -> BoxFuture<'a, LookupResult> {
            self.calls.lock().unwrap().push((query.to_string(), count));
            let (delay, result) = self
                .scripted
                .get(query)
                .cloned()
                .unwrap_or((Duration::ZERO, Ok(LookupOutcome::NotFound)));
            Box::pin(async move {
                tokio::time::sleep(delay).await;
                result
            })
        }
    }

    /// App over an engine harness, with in-memory history
    pub struct AppHarness {
        pub app: App,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl AppHarness {
        pub fn issued(&mut self) -> Vec<LookupRequest> {
            let mut issued = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                issued.push(request);
            }
            issued
        }

        pub fn respond(&mut self, request_id: u64, result: LookupResult) -> usize {
            let _ = self.responses.send(LookupResponse { request_id, result });
            self.app.engine.poll_responses()
        }
    }

    pub fn app_harness() -> AppHarness {
        let EngineHarness {
            engine,
            requests,
            responses,
        } = engine_harness();
        AppHarness {
            app: App::new(engine, HistoryState::empty()),
            requests,
            responses,
        }
    }
}
