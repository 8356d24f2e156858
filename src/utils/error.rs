use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Invalid scanned URL '{payload}': {source}")]
    InvalidUrl {
        payload: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid number '{field}' in set {set_index} of payload '{payload}'")]
    InvalidNumber {
        payload: String,
        set_index: usize,
        field: String,
    },

    #[error("Number {value} in set {set_index} of payload '{payload}' is outside 1..=45")]
    NumberOutOfRange {
        payload: String,
        set_index: usize,
        value: u8,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 掃描內容格式錯誤，可重新掃描
    Payload,
    Config,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LottoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LottoError::InvalidUrl { .. }
            | LottoError::InvalidNumber { .. }
            | LottoError::NumberOutOfRange { .. } => ErrorCategory::Payload,
            LottoError::ConfigValidationError { .. }
            | LottoError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            LottoError::IoError(_)
            | LottoError::SerializationError(_)
            | LottoError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 掃描錯誤只影響單次掃描
            ErrorCategory::Payload => ErrorSeverity::Low,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LottoError::InvalidUrl { .. } => {
                "Rescan the ticket; the QR code should contain an http(s) URL"
            }
            LottoError::InvalidNumber { .. } | LottoError::NumberOutOfRange { .. } => {
                "Rescan the ticket; the code may be damaged or not a lotto ticket"
            }
            LottoError::ConfigValidationError { .. } => {
                "Check the TOML syntax and key names in the config file"
            }
            LottoError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line or in the config file"
            }
            LottoError::IoError(_) => "Check that the input and output streams are available",
            LottoError::SerializationError(_) | LottoError::CsvError(_) => {
                "Try a different --format"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LottoError::InvalidUrl { .. }
            | LottoError::InvalidNumber { .. }
            | LottoError::NumberOutOfRange { .. } => {
                format!("無法讀取這張彩券: {}", self)
            }
            LottoError::ConfigValidationError { field, message } => {
                format!("設定檔錯誤 ({}): {}", field, message)
            }
            LottoError::InvalidConfigValueError { field, value, reason } => {
                format!("設定值無效 {} = '{}': {}", field, value, reason)
            }
            _ => format!("輸出失敗: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;
