use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised inside the selection pipeline.
///
/// None of these reach callers of [`super::ImageSelector::get_product_image`]; they
/// are logged and replaced by the category placeholder.
pub enum SelectionError {
    /// The pipeline panicked; the payload message is kept for logging.
    #[error("selection panicked: {0}")]
    Panicked(String),
}

pub type SelectionResult<T> = Result<T, SelectionError>;

impl SelectionError {
    /// Builds a [`SelectionError::Panicked`] from a caught unwind payload.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic payload".to_string()
        };
        SelectionError::Panicked(message)
    }
}
