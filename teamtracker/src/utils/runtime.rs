use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Global Tokio runtime for async HTTP operations.
///
/// egui drives the UI from its own main-thread loop; reqwest needs a tokio
/// context. Handlers spawn network tasks on this runtime and send results
/// back over the app event channel.
pub static TOKIO_RT: Lazy<Runtime> =
    Lazy::new(|| Runtime::new().expect("failed to create tokio runtime for HTTP operations"));
