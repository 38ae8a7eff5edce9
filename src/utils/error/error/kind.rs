//! Error kinds and their place in the classification tree

use std::fmt;

/// Classification of a [`ServiceError`](super::ServiceError)
///
/// Kinds form a tree rooted at [`ErrorKind::Service`]:
///
/// | Kind | Parent | HTTP code |
/// |------|--------|-----------|
/// | Service | - | 500 |
/// | Validation | Service | 422 |
/// | ResourceNotFound | Service | 404 |
/// | DataProcessing | Service | 500 |
/// | FileRead | DataProcessing | 500 |
/// | Llm | Service | 502 |
/// | ProviderNotFound | Llm | 502 |
/// | ProviderTimeout | Llm | 502 |
/// | Database | Service | 500 |
/// | Query | Database | 500 |
/// | Connection | Database | 500 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Service,
    Validation,
    ResourceNotFound,
    DataProcessing,
    FileRead,
    Llm,
    ProviderNotFound,
    ProviderTimeout,
    Database,
    Query,
    Connection,
}

impl ErrorKind {
    /// Every kind, root first
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::Service,
        ErrorKind::Validation,
        ErrorKind::ResourceNotFound,
        ErrorKind::DataProcessing,
        ErrorKind::FileRead,
        ErrorKind::Llm,
        ErrorKind::ProviderNotFound,
        ErrorKind::ProviderTimeout,
        ErrorKind::Database,
        ErrorKind::Query,
        ErrorKind::Connection,
    ];

    /// HTTP status code reported for this kind
    pub const fn http_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 422,
            ErrorKind::ResourceNotFound => 404,
            ErrorKind::Llm | ErrorKind::ProviderNotFound | ErrorKind::ProviderTimeout => 502,
            ErrorKind::Service
            | ErrorKind::DataProcessing
            | ErrorKind::FileRead
            | ErrorKind::Database
            | ErrorKind::Query
            | ErrorKind::Connection => 500,
        }
    }

    /// Parent kind, `None` for the root
    pub const fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::Service => None,
            ErrorKind::Validation
            | ErrorKind::ResourceNotFound
            | ErrorKind::DataProcessing
            | ErrorKind::Llm
            | ErrorKind::Database => Some(ErrorKind::Service),
            ErrorKind::FileRead => Some(ErrorKind::DataProcessing),
            ErrorKind::ProviderNotFound | ErrorKind::ProviderTimeout => Some(ErrorKind::Llm),
            ErrorKind::Query | ErrorKind::Connection => Some(ErrorKind::Database),
        }
    }

    /// Whether `self` is `ancestor` or one of its descendants
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Name reported in the `type` field of the error envelope
    pub const fn type_name(self) -> &'static str {
        match self {
            ErrorKind::Service => "ServiceError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::ResourceNotFound => "ResourceNotFoundError",
            ErrorKind::DataProcessing => "DataProcessingError",
            ErrorKind::FileRead => "FileReadError",
            ErrorKind::Llm => "LlmError",
            ErrorKind::ProviderNotFound => "ProviderNotFoundError",
            ErrorKind::ProviderTimeout => "ProviderTimeoutError",
            ErrorKind::Database => "DatabaseError",
            ErrorKind::Query => "QueryError",
            ErrorKind::Connection => "ConnectionError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
