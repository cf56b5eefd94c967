use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::database::ActivityRoster;
use crate::error::RosterError;
use crate::models::ActivityRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub spots_left: u32,
    pub is_full: bool,
    pub participants: Vec<String>,
}

pub fn list_activities(roster: &ActivityRoster) -> BTreeMap<String, ActivityRecord> {
    roster.list()
}

pub fn signup(
    roster: &ActivityRoster,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RosterError> {
    match roster.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(Confirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    roster: &ActivityRoster,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RosterError> {
    match roster.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(Confirmation {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}

/// Cards for the landing page. Availability is informational; signups past
/// capacity are still accepted.
pub fn build_activity_cards(roster: &ActivityRoster) -> Vec<ActivityCardView> {
    roster
        .list()
        .into_iter()
        .map(|(name, record)| {
            let spots_left = record.spots_left();
            ActivityCardView {
                name,
                spots_left,
                is_full: spots_left == 0,
                description: record.description,
                schedule: record.schedule,
                max_participants: record.max_participants,
                participants: record.participants,
            }
        })
        .collect()
}
