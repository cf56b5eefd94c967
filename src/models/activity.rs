use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String, // free text, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub max_participants: u32,
    /// Signup order; no duplicates.
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_four_public_fields() {
        let record = ActivityRecord::new("Chess", "Fridays", 12, &["a@mergington.edu"]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Chess",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["a@mergington.edu"],
            })
        );
    }

    #[test]
    fn membership_is_case_sensitive() {
        let record = ActivityRecord::new("Chess", "Fridays", 12, &["a@mergington.edu"]);
        assert!(record.is_registered("a@mergington.edu"));
        assert!(!record.is_registered("A@mergington.edu"));
    }

    #[test]
    fn spots_left_saturates_when_over_capacity() {
        let record = ActivityRecord::new("Tiny", "Never", 1, &["a@x.edu", "b@x.edu"]);
        assert_eq!(record.spots_left(), 0);
    }
}
