// ABOUTME: Simulated farmer notification
// ABOUTME: Logs a structured line standing in for a real email send

use tracing::info;

use crate::directory::FarmerRecord;
use crate::types::Requirement;

/// Notification seam. The request layer holds this as a trait object so
/// the simulated sender can be swapped for a real delivery mechanism
/// (or a recording stub in tests).
pub trait Notifier: Send + Sync {
    fn notify(&self, farmer: &FarmerRecord, requirement: &Requirement);
}

/// Default notifier: simulates an email by logging the send.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, farmer: &FarmerRecord, requirement: &Requirement) {
        info!(
            farmer = %farmer.name,
            email = %farmer.email,
            product = %requirement.product_name,
            quantity = ?requirement.quantity,
            delivery_date = %requirement.delivery_date,
            "Simulated notification email to farmer"
        );
    }
}
