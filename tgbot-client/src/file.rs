//! File attachment resolution.
//!
//! A file-bearing parameter holds either a reference the server already
//! knows (a file id or a URL), which travels as a plain form field, or a
//! local upload, which travels as a multipart part named after the
//! parameter. Anything else is rejected before the request is sent.

use tgbot_core::InputFile;

use crate::error::TypeConstraintError;
use crate::params::{ParamValue, Params};

/// Value of a file-bearing parameter in the typed request API.
#[derive(Debug, Clone, PartialEq)]
pub enum FileInput {
    /// A file id or URL known to the server.
    Remote(String),
    /// Bytes to upload.
    Upload(InputFile),
}

impl FileInput {
    /// A file id or URL.
    pub fn remote(reference: impl Into<String>) -> Self {
        Self::Remote(reference.into())
    }
}

impl From<InputFile> for FileInput {
    fn from(file: InputFile) -> Self {
        Self::Upload(file)
    }
}

impl From<String> for FileInput {
    fn from(reference: String) -> Self {
        Self::Remote(reference)
    }
}

impl From<&str> for FileInput {
    fn from(reference: &str) -> Self {
        Self::Remote(reference.to_string())
    }
}

/// An upload bound to the parameter it fills.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAttachment {
    /// Multipart field name.
    pub field: String,
    /// File to upload.
    pub file: InputFile,
}

/// Where a file parameter ends up on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedFile {
    /// An ordinary form field carrying a file id or URL.
    Reference(String),
    /// A multipart part.
    Attachment(FileAttachment),
}

/// Resolves one file parameter value.
pub fn resolve_file(parameter: &str, value: ParamValue) -> Result<ResolvedFile, TypeConstraintError> {
    match value {
        ParamValue::Str(reference) => Ok(ResolvedFile::Reference(reference)),
        ParamValue::File(file) => Ok(ResolvedFile::Attachment(FileAttachment {
            field: parameter.to_string(),
            file,
        })),
        other => Err(TypeConstraintError::file(parameter, other.kind())),
    }
}

/// Resolves the file parameter `parameter` inside `params`.
///
/// A reference stays in the set as a text field, in its original position.
/// An upload is taken out of the set and returned as the request's
/// attachment. A missing parameter is a type error.
pub fn resolve_file_param(
    params: &mut Params,
    parameter: &str,
) -> Result<Option<FileAttachment>, TypeConstraintError> {
    let missing = || TypeConstraintError::file(parameter, "nothing");

    match params.get(parameter) {
        None => Err(missing()),
        Some(ParamValue::File(_)) => {
            let value = params.remove(parameter).ok_or_else(missing)?;
            match resolve_file(parameter, value)? {
                ResolvedFile::Attachment(attachment) => Ok(Some(attachment)),
                ResolvedFile::Reference(_) => Ok(None),
            }
        }
        Some(value) => resolve_file(parameter, value.clone()).map(|_| None),
    }
}
