use crate::errors::domain::DomainError;

/// Drawing stages, indexed by attempts progress.
pub const STAGE_LABELS: [&str; 11] = [
    "Setup Gallow~",
    "Setup Haning String~",
    "Draw Head~",
    "Draw Left Hand~",
    "Draw Right Hand~",
    "Draw Stick Body~",
    "Draw Left Leg~",
    "Draw Right Leg~",
    "Draw Left Eye~",
    "Draw Right Eye~",
    "Draw Middle Mouth~",
];

/// Label for a progress value; past the end of the table is a configuration error.
pub fn stage_label(progress: i32) -> Result<&'static str, DomainError> {
    usize::try_from(progress)
        .ok()
        .and_then(|idx| STAGE_LABELS.get(idx).copied())
        .ok_or_else(|| {
            DomainError::config(format!(
                "no stage label for attempts progress {progress} (table has {} stages)",
                STAGE_LABELS.len()
            ))
        })
}
