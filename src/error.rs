#[cfg(debug_assertions)]
use alloc::borrow::Cow;
use core::fmt::{Debug, Display, Formatter};

/// Short version of `Err(error("..."))`.
pub fn err<T>(msg: &'static str) -> Result<T, Error> {
    Err(error(msg))
}

/// Creates an error with a message that might be displayed.
pub fn error(_msg: &'static str) -> Error {
    #[cfg(debug_assertions)]
    return Error(Cow::Borrowed(_msg));
    #[cfg(not(debug_assertions))]
    Error(())
}

#[cfg(debug_assertions)]
type ErrorImpl = Cow<'static, str>;
#[cfg(not(debug_assertions))]
type ErrorImpl = ();

/// A value that has no packed timestamp, or a packed timestamp that has no calendar value.
/// # Debug mode
/// In debug mode, the error contains a reason.
/// # Release mode
/// In release mode, the error is a zero-sized type for efficiency.
#[derive(Clone, PartialEq, Eq)]
pub struct Error(ErrorImpl);

impl Error {
    /// The reason, if one was kept. Always `None` in release builds.
    pub fn reason(&self) -> Option<&str> {
        #[cfg(debug_assertions)]
        return Some(&*self.0);
        #[cfg(not(debug_assertions))]
        None
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return write!(f, "Error({:?})", self.0);
        #[cfg(not(debug_assertions))]
        f.write_str("Error(\"timelog error\")")
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return f.write_str(&self.0);
        #[cfg(not(debug_assertions))]
        f.write_str("timelog error")
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {}
