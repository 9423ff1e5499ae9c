//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use merchplan_domain::MerchPlanError;
use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MerchPlanError);

impl From<InfraError> for MerchPlanError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MerchPlanError> for InfraError {
    fn from(value: MerchPlanError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMerchPlanError {
    fn into_merchplan(self) -> MerchPlanError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → MerchPlanError */
/* -------------------------------------------------------------------------- */

impl IntoMerchPlanError for SqlError {
    fn into_merchplan(self) -> MerchPlanError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => MerchPlanError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        MerchPlanError::Storage("database is locked".into())
                    }
                    ErrorCode::ReadOnly => {
                        MerchPlanError::Storage("database is read-only".into())
                    }
                    ErrorCode::DiskFull => MerchPlanError::Storage("disk is full".into()),
                    _ => MerchPlanError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => MerchPlanError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                MerchPlanError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                MerchPlanError::Storage(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => MerchPlanError::Config(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => MerchPlanError::Storage("invalid SQL query".into()),
            other => MerchPlanError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_merchplan())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → MerchPlanError */
/* -------------------------------------------------------------------------- */

impl IntoMerchPlanError for PoolError {
    fn into_merchplan(self) -> MerchPlanError {
        MerchPlanError::Storage(format!("connection pool error: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_merchplan())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → MerchPlanError */
/* -------------------------------------------------------------------------- */

impl IntoMerchPlanError for IoError {
    fn into_merchplan(self) -> MerchPlanError {
        match self.kind() {
            ErrorKind::NotFound => MerchPlanError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                MerchPlanError::Storage(format!("permission denied: {self}"))
            }
            _ => MerchPlanError::Storage(format!("i/o failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_merchplan())
    }
}

/* -------------------------------------------------------------------------- */
/* Parse errors → MerchPlanError */
/* -------------------------------------------------------------------------- */

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(MerchPlanError::Config(format!("Invalid TOML format: {value}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(MerchPlanError::from(value))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
