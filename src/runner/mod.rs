//! Sequential execution loop
//!
//! Sends the same descriptor once per iteration and yields one [`Outcome`]
//! per call. Iterations never overlap: the next call is only issued after
//! the consumer has taken the previous outcome and the interval has passed.

use std::time::{Duration, Instant};

use async_stream::stream;
use futures::Stream;
use tracing::{debug, info};

use crate::client::{HttpResponse, Transport, TransportError};
use crate::request::RequestDescriptor;

/// Result of one iteration together with its timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// 1-based iteration number
    pub iteration: u32,
    /// Wall time from issuing the call to its completion
    pub elapsed: Duration,
    pub result: Result<HttpResponse, TransportError>,
}

impl Outcome {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Drives a [`Transport`] for a fixed number of iterations
#[derive(Debug, Clone)]
pub struct ExecutionLoop<T> {
    transport: T,
    iterations: u32,
    interval: Duration,
}

impl<T: Transport> ExecutionLoop<T> {
    /// `iterations` below one is raised to one
    pub fn new(transport: T, iterations: u32, interval: Duration) -> Self {
        Self {
            transport,
            iterations: iterations.max(1),
            interval,
        }
    }

    /// Lazily run every iteration against `descriptor`.
    ///
    /// Nothing is sent until the stream is polled. The pause between
    /// iterations happens after an outcome has been taken, and there is no
    /// pause after the last one.
    pub fn run<'a>(&'a self, descriptor: &'a RequestDescriptor) -> impl Stream<Item = Outcome> + 'a {
        stream! {
            for iteration in 1..=self.iterations {
                let start = Instant::now();
                let result = self.transport.send(descriptor).await;
                let elapsed = start.elapsed();

                match &result {
                    Ok(response) => info!(
                        iteration,
                        status = response.status,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Iteration completed"
                    ),
                    Err(error) => info!(
                        iteration,
                        elapsed_ms = elapsed.as_millis() as u64,
                        error = %error,
                        "Iteration failed"
                    ),
                }

                yield Outcome { iteration, elapsed, result };

                if iteration < self.iterations && !self.interval.is_zero() {
                    debug!(interval_ms = self.interval.as_millis() as u64, "Waiting before next iteration");
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}
