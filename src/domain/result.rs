//! Result type alias for Signal Booster

use super::errors::SignalBoosterError;

/// Result type alias for Signal Booster operations
///
/// # Examples
///
/// ```
/// use signal_booster::domain::result::Result;
/// use signal_booster::domain::errors::SignalBoosterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SignalBoosterError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SignalBoosterError>;
