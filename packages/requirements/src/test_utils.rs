// ABOUTME: Test helpers for exercising the requirement intake flow
// ABOUTME: Provides a recording notifier so tests can observe simulated sends

use std::sync::Mutex;

use crate::directory::FarmerRecord;
use crate::notifier::Notifier;
use crate::types::Requirement;

/// Records the name of every farmer a notification was sent to, in
/// call order, instead of logging.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notified: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notified(&self) -> Vec<String> {
        self.notified.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, farmer: &FarmerRecord, _requirement: &Requirement) {
        self.notified.lock().unwrap().push(farmer.name.clone());
    }
}
