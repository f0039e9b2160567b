//! Canonical schema constants for structured logging and diff reports
//!
//! These constants ensure consistency across logging, error reporting and
//! report rendering.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Diff-specific fields
pub const FIELD_MISMATCHES: &str = "mismatches";
pub const FIELD_LABEL: &str = "label";
pub const FIELD_LEFT_LEN: &str = "left_len";
pub const FIELD_RIGHT_LEN: &str = "right_len";
pub const FIELD_TYPE_NAME: &str = "type_name";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Label path syntax
pub const PATH_SEPARATOR: &str = ".";
pub const LINE_SEPARATOR: &str = "\n";
pub const DESCRIPTION_SEPARATOR: &str = ": ";
