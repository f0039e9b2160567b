//! Core types shared across labeldiff facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by error reporting in `labeldiff-core`:
//!
//! - **Field keys**: structured logging field names
//! - **Event names**: canonical start/end/error event names
//! - **Path syntax**: the separators used when rendering label paths

pub mod schema;
