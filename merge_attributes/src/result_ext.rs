//! Extensions for mapping `serde_json` failures onto `MergeResult` concisely.
//!
//! `serde_json::Error` surfaces both when rendering caller values and when
//! parsing configuration documents, so the variant cannot be picked by a
//! blanket `From` conversion. These helpers name the intent at the call site.

use crate::{MergeAttributesError, MergeResult};

/// Routes a `serde_json` failure to the matching [`MergeAttributesError`].
pub(crate) trait JsonResultExt<T> {
    /// Treat the failure as an input rendering error.
    fn into_serialize_err(self) -> MergeResult<T>;

    /// Treat the failure as a configuration document error.
    fn into_config_err(self) -> MergeResult<T>;
}

impl<T> JsonResultExt<T> for Result<T, serde_json::Error> {
    fn into_serialize_err(self) -> MergeResult<T> {
        self.map_err(MergeAttributesError::serialize)
    }

    fn into_config_err(self) -> MergeResult<T> {
        self.map_err(MergeAttributesError::config_json)
    }
}
