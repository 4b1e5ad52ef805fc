// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::{AppointmentError, AppointmentStatus};

/// How strictly status edits are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may follow any other.
    #[default]
    Unrestricted,
    /// Cancelled, completed and no-show appointments are locked.
    Strict,
}

impl TransitionPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.strict_status_transitions {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Unrestricted
        }
    }
}

pub struct AppointmentLifecycleService {
    policy: TransitionPolicy,
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new(TransitionPolicy::default())
    }
}

impl AppointmentLifecycleService {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Every appointment starts here regardless of what the form held.
    pub fn initial_status(&self) -> AppointmentStatus {
        AppointmentStatus::Confirmed
    }

    pub fn validate_status_transition(
        &self,
        current_status: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition from {} to {}", current_status, new_status);

        if !self.get_valid_transitions(current_status).contains(&new_status) {
            warn!("Invalid status transition attempted: {} -> {}", current_status, new_status);
            return Err(AppointmentError::InvalidStatusTransition {
                from: current_status,
                to: new_status,
            });
        }

        Ok(())
    }

    /// Statuses reachable from `current_status`, including staying put.
    pub fn get_valid_transitions(&self, current_status: AppointmentStatus) -> Vec<AppointmentStatus> {
        match self.policy {
            TransitionPolicy::Unrestricted => AppointmentStatus::ALL.to_vec(),
            TransitionPolicy::Strict if current_status.is_closed() => vec![current_status],
            TransitionPolicy::Strict => AppointmentStatus::ALL.to_vec(),
        }
    }
}
