//! This module contains helper functionality.

mod error;
pub use self::error::*;

mod timing;
pub use self::timing::*;

use std::sync::Arc;

/// A logger type used to report progress of reading and checking.
pub type InfoLogger = Arc<dyn Fn(&str)>;
