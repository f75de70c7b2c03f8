//! Search document building
//!
//! Turns the quads of one subject into a flat, multi-valued [`Document`] and
//! hands documents to a [`DocumentSink`].

pub mod builder;
pub mod clock;
pub mod config;
pub mod document;
pub mod fields;
pub mod indexer;
pub mod sink;

pub use builder::{
    build_document, BuildError, BuildResult, DefaultDocumentBuilder, DocumentBuilder,
    DocumentKey, QuadHook,
};
pub use clock::{format_index_date, Clock, FixedClock, SystemClock, INDEX_DATE_FORMAT};
pub use config::{BuilderConfig, ConfigError, ConfigResult, IndexerConfig};
pub use document::Document;
pub use fields::FieldName;
pub use indexer::{group_by_key, IndexError, IndexReport, IndexResult, QuadIndexer};
pub use sink::{DocumentSink, JsonLinesSink, MemorySink, SinkError, SinkResult};
