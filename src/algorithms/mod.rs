//! Collection algorithms composed from the derived operations.

pub mod flatten;
pub mod invoke;
pub mod sets;
pub mod shuffle;
pub mod sort_by;
pub mod zip;

pub use flatten::Nested;
pub use flatten::flatten;
pub use invoke::Invocation;
pub use invoke::InvokeError;
pub use invoke::Method;
pub use invoke::Methods;
pub use invoke::invoke;
pub use sets::difference;
pub use sets::intersection;
pub use shuffle::shuffle;
pub use shuffle::shuffle_with;
pub use sort_by::SortKey;
pub use sort_by::sort_by;
pub use zip::Row;
pub use zip::zip;
