//! Lifecycle logging for repository operations
//!
//! Every operation emits one `start` event and then exactly one of `end` or
//! `end_error`. All three carry the emitting module as `component` and the
//! operation name as `op`; extra fields are passed through to `tracing`.
//! Event names come from `herodex-core-types`, which callers must depend on.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// ```
/// # use herodex_core::log_op_start;
/// log_op_start!("hero_create");
/// log_op_start!("hero_get", hero_id = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            herodex_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Successful end; `duration_ms` is required and comes first
///
/// ```
/// # use herodex_core::log_op_end;
/// log_op_end!("hero_list", duration_ms = 3, row_count = 7);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            herodex_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Failed end, at error level
///
/// `$err` is anything that converts into `ExError`; its kind and stable code
/// are attached as `err_kind` and `err_code`.
///
/// ```
/// # use herodex_core::log_op_error;
/// # use herodex_core::errors::HerodexError;
/// let err = HerodexError::IdentityNotFound { entity: "hero".into(), id: 9001 };
/// log_op_error!("hero_get", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            herodex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
