use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum RoomError {
    #[error("Unknown sensor type: {0}")]
    UnknownSensorType(String),

    #[error("Unknown device type: {0}")]
    UnknownDeviceType(String),

    #[error("Smoothing window must be >= 1, got {0}")]
    InvalidWindow(usize),

    #[error("Scheduler interval must be > 0 ms")]
    InvalidInterval,

    #[error("Id already registered: {0}")]
    DuplicateId(String),

    #[error("Device not found: {0}")]
    UnknownDevice(String),

    #[error("Strategy failed: {0}")]
    Strategy(String),

    #[error("Invalid report row {row}: {reason}")]
    InvalidReport { row: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl RoomError {
    /// True for errors raised synchronously while building or looking up
    /// components (bad type names, bad windows, duplicate ids).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RoomError::UnknownSensorType(_)
                | RoomError::UnknownDeviceType(_)
                | RoomError::InvalidWindow(_)
                | RoomError::InvalidInterval
                | RoomError::DuplicateId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RoomError>;
