//! Common functionality shared across modules

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if a required field is
    /// missing
    fn build(self) -> Result<Self::Config, crate::error::DebGraphError>;
}
