/// Expected, user-facing failures of a roster transition.
///
/// The `Display` strings double as the `detail` field of HTTP error bodies,
/// so clients match on them literally.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(thiserror::Error)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up")]
    NotRegistered,
}
