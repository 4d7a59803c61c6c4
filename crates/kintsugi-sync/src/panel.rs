//! Panel visibility and its two controls.

use strum::Display;

/// Settled visibility of the host panel.
///
/// Derived from the host's transient signal: the literal string `"true"`
/// means open, anything else — including a missing attribute — means
/// closed. The host's signal is boolean-ish, not boolean; coercion lives
/// here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    Open,
    Closed,
}

impl Visibility {
    /// Interpret a raw transient attribute value.
    pub fn from_transient(raw: Option<&str>) -> Self {
        if raw == Some("true") {
            Visibility::Open
        } else {
            Visibility::Closed
        }
    }

    /// The value written to the stable attribute.
    pub fn as_stable_value(self) -> &'static str {
        match self {
            Visibility::Open => "true",
            Visibility::Closed => "false",
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Visibility::Open)
    }
}

/// The two controls wired to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Control {
    /// Expands the panel. Lives outside it, visible while collapsed.
    Open,
    /// Collapses the panel. Lives inside it, leaves the accessibility
    /// tree once the panel hides.
    Close,
}

impl Control {
    /// The control focus should land on after this one is clicked.
    ///
    /// Clicking either control hides it (or its container), so focus must
    /// move to the opposite control once the transition finishes.
    pub fn counterpart(self) -> Control {
        match self {
            Control::Open => Control::Close,
            Control::Close => Control::Open,
        }
    }

    /// The optimistic expanded state implied by clicking this control.
    pub fn implies_expanded(self) -> bool {
        matches!(self, Control::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_coercion() {
        assert_eq!(Visibility::from_transient(Some("true")), Visibility::Open);
        assert_eq!(Visibility::from_transient(Some("false")), Visibility::Closed);
        // Host quirks: empty, garbage, and absent all read as closed.
        assert_eq!(Visibility::from_transient(Some("")), Visibility::Closed);
        assert_eq!(Visibility::from_transient(Some("TRUE")), Visibility::Closed);
        assert_eq!(Visibility::from_transient(None), Visibility::Closed);
    }

    #[test]
    fn test_stable_rendering() {
        assert_eq!(Visibility::Open.as_stable_value(), "true");
        assert_eq!(Visibility::Closed.as_stable_value(), "false");
    }

    #[test]
    fn test_counterpart() {
        assert_eq!(Control::Open.counterpart(), Control::Close);
        assert_eq!(Control::Close.counterpart(), Control::Open);
    }
}
