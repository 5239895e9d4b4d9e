pub mod answer_client;
pub mod transport;

pub use answer_client::AnswerClient;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
