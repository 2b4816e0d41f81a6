use crate::config::{Printer, SelectorError};
use crate::inspect::Inspect;

// -----------------------------------------------------------------------------
// PrintToString

/// Rendering sugar available on every inspectable value.
///
/// # Examples
///
/// ```
/// use objprint::PrintToString;
///
/// assert_eq!(42.print_to_string(), "42");
/// assert_eq!(
///     vec![1, 2].print_to_string(),
///     "Vec<i32>\n\t[0] = 1\n\t[1] = 2"
/// );
/// assert_eq!(
///     vec![1.5_f64].print_with(|config| config.exclude_type::<f64>()),
///     "Vec<f64>\n\t[0] = 1.5"
/// );
/// ```
///
/// (Excluding `f64` above is a no-op: exclusions apply to members, and a
/// sequence has none.)
pub trait PrintToString: Inspect {
    /// Renders this value with an empty configuration.
    fn print_to_string(&self) -> String
    where
        Self: Sized,
    {
        Printer::<Self>::new().print(self)
    }

    /// Renders this value with an ad hoc configuration.
    fn print_with(&self, configure: impl FnOnce(Printer<Self>) -> Printer<Self>) -> String
    where
        Self: Sized,
    {
        configure(Printer::new()).print(self)
    }

    /// Renders this value with an ad hoc configuration using fallible
    /// (member-selecting) builder calls.
    fn try_print_with(
        &self,
        configure: impl FnOnce(Printer<Self>) -> Result<Printer<Self>, SelectorError>,
    ) -> Result<String, SelectorError>
    where
        Self: Sized,
    {
        Ok(configure(Printer::new())?.print(self))
    }
}

impl<T: Inspect> PrintToString for T {}
