use thiserror::Error;

/// Contract violations reported by the list layer.
///
/// Every variant is a programmer error: the current render/configuration attempt is rejected
/// and nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("FlatList does not support custom data formats (`get_item`/`get_item_count`)")]
    CustomDataFormat,

    #[error("num_columns must be at least 1")]
    InvalidNumColumns,

    #[error("num_columns > 1 does not support horizontal lists")]
    HorizontalColumns,

    #[error("column_wrapper_style is not supported for single column lists")]
    ColumnWrapperStyleSingleColumn,

    #[error("the legacy list does not support multiple columns")]
    LegacyMultipleColumns,

    #[error(
        "changing num_columns on the fly is not supported (from {from} to {to}); \
         create a new list instance to change the number of columns"
    )]
    NumColumnsChanged { from: usize, to: usize },

    #[error(
        "internal consistency error: expected each row to consist of 1-{num_columns} columns, \
         received a single item"
    )]
    ExpectedColumns { num_columns: usize },

    #[error("internal consistency error: expected a single item in a single column list")]
    ExpectedSingleItem,

    #[error("viewability token is missing its row index")]
    MissingIndex,

    #[error("`refreshing` must be set in order to use `on_refresh`")]
    RefreshingRequired,

    #[error("cannot specify both item_visible_percent_threshold and view_area_coverage_percent_threshold")]
    ConflictingViewabilityThresholds,

    #[error("index {index} is out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("item not found in list data")]
    ItemNotFound,

    #[error("render_section_header is required when rendering sections")]
    MissingSectionHeaderRenderer,

    #[error("{operation} is not supported by the legacy list")]
    Unsupported { operation: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
