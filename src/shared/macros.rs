/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a startup result, or logs `context` with the error and exits with status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    #[test]
    fn test_unwrap_or_exit_passes_values_through() {
        // Arrange
        let loaded: Result<u8, String> = Ok(5);

        // Act
        let floor = unwrap_or_exit!(loaded, "Failed to load floor");

        // Assert
        assert_eq!(floor, 5);
    }
}
