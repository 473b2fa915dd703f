//! Small operations showing each failure class in use
//!
//! Every function here fails in a fixed way so a driver can show how
//! callers create, wrap and classify failures.

use crate::pipeline::Pipeline;
use crate::step::Metadata;
use faultline_core::{Context, Failure, NOT_FOUND};
use tracing::debug;

/// Integer division that fails on a zero divisor
pub fn divide(a: i64, b: i64) -> Result<i64, Failure> {
    if b == 0 {
        return Err(Failure::value("division by zero"));
    }
    a.checked_div(b).ok_or_else(|| Failure::value("integer overflow"))
}

/// Read the application config; the file is never there
pub fn read_config() -> Result<String, Failure> {
    Err(Failure::value("config file not found"))
}

/// Load the application, adding context to a config failure
pub fn load_app() -> Result<String, Failure> {
    read_config().context("loadApp failed")
}

/// Look up a user; the directory is empty
pub fn find_user(id: u64) -> Result<Metadata, Failure> {
    debug!(id, "looking up user");
    Err(Failure::sentinel(&NOT_FOUND))
}

/// Fetch a remote resource; the server answers 404
pub fn fetch_resource() -> Result<String, Failure> {
    Err(Failure::custom(404, "Not Found"))
}

/// Fetch step of [`process`]; always fails
pub fn fetch_metadata() -> Result<Metadata, Failure> {
    Err(Failure::value("failed to fetch metadata"))
}

/// Save step of [`process`]; always succeeds
pub fn save_to_db(data: &Metadata) -> Result<(), Failure> {
    debug!(id = data.id, name = %data.name, "saved");
    Ok(())
}

/// Run the fetch-then-save pipeline over [`fetch_metadata`] and [`save_to_db`]
pub fn process() -> Result<(), Failure> {
    Pipeline::new(fetch_metadata, save_to_db).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_core::{classify, extract, CustomError, FailureKind};

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 2).unwrap(), 5);
        assert_eq!(divide(10, 0).unwrap_err().message(), "division by zero");
        assert_eq!(divide(i64::MIN, -1).unwrap_err().message(), "integer overflow");
    }

    #[test]
    fn test_load_app_wraps_config_failure() {
        let failure = load_app().unwrap_err();
        assert_eq!(failure.message(), "loadApp failed: config file not found");
        assert_eq!(failure.root().kind(), FailureKind::Value);
    }

    #[test]
    fn test_find_user_is_not_found() {
        assert!(classify(&find_user(42).unwrap_err(), &NOT_FOUND));
    }

    #[test]
    fn test_fetch_resource_is_custom() {
        let failure = fetch_resource().unwrap_err();
        assert_eq!(extract(&failure), Some(CustomError::new(404, "Not Found")));
    }

    #[test]
    fn test_process_fails_at_fetch() {
        let failure = process().unwrap_err();
        assert_eq!(failure.message(), "fetch failed: failed to fetch metadata");
        assert_eq!(failure.depth(), 1);
    }

    #[test]
    fn test_save_to_db_succeeds() {
        assert!(save_to_db(&Metadata::new(1, "x")).is_ok());
    }
}
