use core::fmt::{Display, Formatter};

/// Failures when wrapping host-provided memory. Drawing itself never fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The framebuffer slice does not hold exactly `width * height / 4` bytes.
    FramebufferSize { expected: usize, actual: usize },
    /// The host memory region ends before the framebuffer does.
    MemoryTooSmall { required: usize, actual: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::FramebufferSize { expected, actual } => {
                write!(f, "framebuffer must be {expected} bytes, got {actual}")
            }
            Error::MemoryTooSmall { required, actual } => {
                write!(f, "host memory must span at least {required} bytes, got {actual}")
            }
        }
    }
}

impl core::error::Error for Error {}
