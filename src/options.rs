/// Configuration for a formatting run.
///
/// Threaded explicitly through every call that needs it, rather than living
/// in process-wide state, so the same process (or test) can run formatters
/// with different settings side by side.
///
/// # Example
///
/// ```rust
/// use jsonfmt::FormatOptions;
///
/// let options = FormatOptions { write_in_place: true };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Write reformatted files back to themselves instead of printing to the
    /// output sink. Ignored when the source is a stream rather than a real
    /// file. Default: false.
    pub write_in_place: bool,
}
