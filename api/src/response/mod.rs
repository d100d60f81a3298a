//! Response decoding.
//!
//! [`ResponseFormat`] tells the client how to turn a successful response into
//! a value: [`JsonFormat<T>`] decodes the body, [`NoContent`] ignores it.
//! [`Envelope`] and [`Page`] mirror the `{success, data}` wrapper the
//! Scheduler0 API puts around every payload.

mod envelope;
mod format;

pub use envelope::{Envelope, Page};
pub(crate) use envelope::nullable_vec;
pub use format::{JsonFormat, NoContent, ResponseFormat};
