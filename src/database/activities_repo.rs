use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RosterError;
use crate::models::ActivityRecord;

/// In-memory activity roster.
///
/// The set of activity names is fixed at construction; only participant lists
/// change afterwards. Every record sits behind its own lock so a membership
/// check and the write that follows it cannot interleave with another request
/// for the same activity. Cloning the roster clones a handle, not the data.
#[derive(Clone, Debug)]
pub struct ActivityRoster {
    records: Arc<BTreeMap<String, Mutex<ActivityRecord>>>,
}

impl ActivityRoster {
    pub fn new(records: impl IntoIterator<Item = (String, ActivityRecord)>) -> Self {
        let records = records
            .into_iter()
            .map(|(name, record)| (name, Mutex::new(record)))
            .collect();
        Self {
            records: Arc::new(records),
        }
    }

    /// Snapshot of every activity, ordered by name.
    pub fn list(&self) -> BTreeMap<String, ActivityRecord> {
        self.records
            .iter()
            .map(|(name, record)| (name.clone(), record.lock().clone()))
            .collect()
    }

    pub fn get(&self, activity_name: &str) -> Option<ActivityRecord> {
        self.records
            .get(activity_name)
            .map(|record| record.lock().clone())
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut record = self.lock_record(activity_name)?;
        if record.is_registered(email) {
            return Err(RosterError::AlreadyRegistered);
        }
        record.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut record = self.lock_record(activity_name)?;
        let Some(pos) = record.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered);
        };
        record.participants.remove(pos);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lock_record(
        &self,
        activity_name: &str,
    ) -> Result<parking_lot::MutexGuard<'_, ActivityRecord>, RosterError> {
        self.records
            .get(activity_name)
            .map(|record| record.lock())
            .ok_or(RosterError::NotFound)
    }
}
