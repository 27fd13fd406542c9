use serde::Serialize;
use tracing::{info, warn};

use crate::database::{ActivityDirectory, ActivityMap, DirectoryError};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
}

pub fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.list()
}

pub fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, DirectoryError> {
    match directory.enroll(activity_name, email) {
        Ok(change) => {
            info!(activity = %change.activity, email = %change.email, "signup accepted");
            Ok(Confirmation {
                message: format!("Signed up {} for {}", change.email, change.activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, DirectoryError> {
    match directory.withdraw(activity_name, email) {
        Ok(change) => {
            info!(activity = %change.activity, email = %change.email, "unregister accepted");
            Ok(Confirmation {
                message: format!("Unregistered {} from {}", change.email, change.activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
