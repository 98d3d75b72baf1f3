//! Contact form: field validation and the submission lifecycle.

mod form;
mod session;
mod transport;
mod validate;

pub use form::{ContactForm, Field};
pub use session::{ContactSession, FAILURE_MESSAGE, SUCCESS_MESSAGE, SubmissionStatus, SubmitError};
pub use transport::{SimulatedTransport, Transport, TransportError};
pub use validate::{MIN_MESSAGE_LEN, ValidationError, ValidationErrors, validate};
