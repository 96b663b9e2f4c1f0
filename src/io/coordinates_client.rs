//! Background synchronization of region coordinate overrides.
//!
//! This module talks to the coordinates endpoint of the backing API in
//! background threads, keeping the GUI responsive during network I/O.
//! When no API base URL is configured the client stays fully local and
//! every request resolves to a no-op.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;
use serde::{Deserialize, Serialize};

use officeplan::Region;

/// Environment variable naming the API base URL. Unset means local-only.
pub const API_BASE_ENV: &str = "OFFICEPLAN_API";

/// Wire envelope for both GET and POST of the coordinates endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CoordinatesPayload {
    /// Region geometry keyed by office number. Values stay raw so one
    /// malformed entry cannot poison the rest.
    pub coordinates: HashMap<String, serde_json::Value>,
}

/// Result of a completed sync operation.
pub enum SyncResult {
    /// Fetch completed; raw override entries keyed by office number
    Loaded(HashMap<String, serde_json::Value>),
    /// Fetch failed with an error
    LoadFailed(String),
    /// Save completed successfully
    Saved,
    /// Save failed with an error
    SaveFailed(String),
    /// No result available
    None,
}

enum Outcome {
    Loaded(HashMap<String, serde_json::Value>),
    LoadFailed(String),
    Saved,
    SaveFailed(String),
}

/// Manages background synchronization with the coordinates endpoint.
///
/// This struct coordinates background thread HTTP requests with the main
/// GUI thread. Call `check_completion()` once per frame to collect
/// results.
pub struct CoordinatesClient {
    /// API base URL; `None` means local-only operation
    base_url: Option<String>,

    /// Shared in-progress flag
    busy: Arc<Mutex<bool>>,

    /// Channel receiver for the pending request's outcome
    receiver: Option<Receiver<Outcome>>,
}

impl CoordinatesClient {
    /// Creates a client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_BASE_ENV).ok())
    }

    /// Creates a client with an explicit base URL (`None` for local-only).
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url,
            busy: Arc::new(Mutex::new(false)),
            receiver: None,
        }
    }

    /// Returns true when a remote endpoint is configured.
    pub fn is_remote(&self) -> bool {
        self.base_url.is_some()
    }

    /// Checks if a sync operation is currently in progress.
    pub fn is_busy(&self) -> bool {
        *self.busy.lock().unwrap()
    }

    fn endpoint(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/floor-plan/coordinates", base.trim_end_matches('/')))
    }

    /// Starts fetching the stored overrides in a background thread.
    ///
    /// Local-only clients (no base URL) do nothing. A request already in
    /// flight also makes this a no-op.
    pub fn start_fetch(&mut self, ctx: &egui::Context) {
        let Some(url) = self.endpoint() else {
            return;
        };
        if self.is_busy() {
            return;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        *self.busy.lock().unwrap() = true;

        let busy = Arc::clone(&self.busy);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let outcome = match fetch_coordinates(&url) {
                Ok(entries) => Outcome::Loaded(entries),
                Err(e) => Outcome::LoadFailed(e.to_string()),
            };
            let _ = sender.send(outcome);
            *busy.lock().unwrap() = false;
            ctx_handle.request_repaint();
        });
    }

    /// Starts saving `overrides` in a background thread.
    ///
    /// The full effective set is posted, matching the endpoint's
    /// replace-everything semantics.
    pub fn start_save(
        &mut self,
        overrides: HashMap<String, Region>,
        ctx: &egui::Context,
    ) {
        let Some(url) = self.endpoint() else {
            return;
        };
        if self.is_busy() {
            return;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        *self.busy.lock().unwrap() = true;

        let busy = Arc::clone(&self.busy);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let outcome = match save_coordinates(&url, &overrides) {
                Ok(()) => Outcome::Saved,
                Err(e) => Outcome::SaveFailed(e.to_string()),
            };
            let _ = sender.send(outcome);
            *busy.lock().unwrap() = false;
            ctx_handle.request_repaint();
        });
    }

    /// Checks if a background request has completed and returns its
    /// result. Call once per frame in the update loop.
    pub fn check_completion(&mut self) -> SyncResult {
        if let Some(receiver) = &self.receiver {
            if let Ok(outcome) = receiver.try_recv() {
                self.receiver = None;
                return match outcome {
                    Outcome::Loaded(entries) => SyncResult::Loaded(entries),
                    Outcome::LoadFailed(msg) => {
                        log::warn!("coordinate fetch failed: {msg}");
                        SyncResult::LoadFailed(msg)
                    }
                    Outcome::Saved => SyncResult::Saved,
                    Outcome::SaveFailed(msg) => {
                        log::warn!("coordinate save failed: {msg}");
                        SyncResult::SaveFailed(msg)
                    }
                };
            }
        }
        SyncResult::None
    }
}

impl Default for CoordinatesClient {
    fn default() -> Self {
        Self::from_env()
    }
}

fn fetch_coordinates(url: &str) -> anyhow::Result<HashMap<String, serde_json::Value>> {
    let client = reqwest::blocking::Client::new();
    let payload: CoordinatesPayload = client.get(url).send()?.error_for_status()?.json()?;
    Ok(payload.coordinates)
}

fn save_coordinates(url: &str, overrides: &HashMap<String, Region>) -> anyhow::Result<()> {
    let coordinates = overrides
        .iter()
        .map(|(id, region)| {
            let value = serde_json::to_value(region)?;
            Ok((id.clone(), value))
        })
        .collect::<anyhow::Result<HashMap<_, _>>>()?;

    let client = reqwest::blocking::Client::new();
    client
        .post(url)
        .json(&CoordinatesPayload { coordinates })
        .send()?
        .error_for_status()?;
    Ok(())
}
