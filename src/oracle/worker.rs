//! Non-blocking oracle wrapper
//!
//! Requests go to a worker thread over a channel. The caller never waits:
//! it gets the last decision that came back, or `Stay` once the request in
//! flight is older than the timeout. At most one request is in flight.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use super::DecisionOracle;
use super::wire::DecisionRequest;
use crate::error::OracleError;
use crate::sim::Decision;

pub struct AsyncOracle {
    /// `None` once the worker is known to be gone
    requests: Option<Sender<DecisionRequest>>,
    replies: Receiver<Decision>,
    /// When the request in flight was posted
    in_flight: Option<Instant>,
    overdue: bool,
    last_known: Decision,
    timeout: Duration,
}

impl AsyncOracle {
    /// Move `inner` onto a worker thread.
    ///
    /// The worker exits once this handle is dropped and its current request
    /// (if any) finishes.
    pub fn spawn(inner: Box<dyn DecisionOracle + Send>, timeout: Duration) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<DecisionRequest>();
        let (reply_tx, reply_rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("oracle-worker".into())
            .spawn(move || {
                let mut inner = inner;
                for request in request_rx {
                    let decision = inner.decide(&request);
                    if reply_tx.send(decision).is_err() {
                        break;
                    }
                }
                log::debug!("Oracle worker exiting");
            });

        let requests = match spawned {
            Ok(_) => Some(request_tx),
            Err(e) => {
                log::warn!("Failed to start oracle worker: {}; opponent will stay", e);
                None
            }
        };

        Self {
            requests,
            replies: reply_rx,
            in_flight: None,
            overdue: false,
            last_known: Decision::Stay,
            timeout,
        }
    }

    /// A request has been posted and not yet answered
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The pending request has outlived the timeout
    pub fn is_overdue(&self) -> bool {
        self.overdue
    }

    pub fn last_known(&self) -> Decision {
        self.last_known
    }

    fn worker_gone(&mut self) {
        if self.requests.take().is_some() {
            log::warn!("{}; opponent will stay", OracleError::WorkerGone);
        }
        self.in_flight = None;
        self.overdue = false;
        self.last_known = Decision::Stay;
    }

    fn collect_replies(&mut self) {
        loop {
            match self.replies.try_recv() {
                Ok(decision) => {
                    if self.overdue {
                        log::debug!("Late oracle reply arrived: {}", decision.as_str());
                    }
                    self.last_known = decision;
                    self.in_flight = None;
                    self.overdue = false;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.worker_gone();
                    break;
                }
            }
        }
    }

    fn post(&mut self, request: &DecisionRequest) {
        let Some(requests) = &self.requests else {
            return;
        };
        if requests.send(request.clone()).is_err() {
            self.worker_gone();
            return;
        }
        self.in_flight = Some(Instant::now());
    }
}

impl DecisionOracle for AsyncOracle {
    fn decide(&mut self, request: &DecisionRequest) -> Decision {
        self.collect_replies();

        match self.in_flight {
            None => self.post(request),
            Some(posted) => {
                if !self.overdue && posted.elapsed() >= self.timeout {
                    log::warn!(
                        "Oracle has not replied within {:?}; opponent stays",
                        self.timeout
                    );
                    self.overdue = true;
                    self.last_known = Decision::Stay;
                }
            }
        }

        self.last_known
    }
}
